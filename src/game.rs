//! Game scene.
//!
//! Builds the two objects of the scene and drives them every frame:
//!
//! - **Ball**: a batched sprite pinned to the window centre, sized to the
//!   window width and kept square. Holding the grow key grows its transform.
//! - **Menu**: a translucent black panel, centred, 35% of the window wide and
//!   full height.
//!
//! Drawing goes background first (stretched over the window), then the object
//! batch, then each object's own draw.

use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::aspectratio::AspectRatioComponent;
use crate::components::boxrenderer::BoxRenderer;
use crate::components::screenrelative::ScreenRelativeTransform;
use crate::components::sprite::Sprite;
use crate::components::spriterenderer::SpriteRendererComponent;
use crate::components::transform::Transform;
use crate::gameobject::{GameObject, GameObjectId};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::spritebatch::SpriteBatch;
use crate::resources::surface::{SharedSize, Surface};
use crate::resources::texturestore::{AssetError, Texture, TextureLoader};
use crate::resources::worldtime::WorldTime;
use crate::systems::render::Canvas;
use crate::systems::time::update_world_time;

/// Growth of the ball transform per second while the grow key is held.
const GROW_RATE: f32 = 2.0;

/// Build a menu panel pinned to `window`.
pub fn menu_object(name: &str, transform: Transform, window: &SharedSize) -> GameObject {
    let mut menu = GameObject::with_transform(name, transform);
    menu.add_component(BoxRenderer::rgba(0, 0, 0, 150));
    menu.add_component(ScreenRelativeTransform::new(
        window.clone(),
        0.5,
        0.5,
        0.35,
        1.0,
    ));
    menu
}

pub struct Game {
    window: SharedSize,
    background: Texture,
    batch: SpriteBatch,
    objects: Vec<GameObject>,
    ball: GameObjectId,
    menu: GameObjectId,
    time: WorldTime,
}

impl Game {
    /// Load the scene assets and create the Ball and the Menu.
    pub fn setup(
        loader: &mut dyn TextureLoader,
        config: &GameConfig,
        window: SharedSize,
    ) -> Result<Self, AssetError> {
        let background = loader.load_texture(&config.background_path)?;
        let batch = SpriteBatch::new();

        let mut ball = GameObject::with_transform("Ball", Transform::default());
        ball.add_component(SpriteRendererComponent::new(loader, &config.ball_path, 1.0)?)
            .add_to_batch(&batch);
        ball.add_component(ScreenRelativeTransform::new(
            window.clone(),
            0.5,
            0.5,
            1.0,
            1.0,
        ));
        ball.add_component(AspectRatioComponent::default());

        let menu = menu_object(
            "Menu",
            Transform::new(150.0, 150.0).with_scale(100.0),
            &window,
        );

        info!("Scene ready: {} and {}", ball, menu);

        Ok(Self {
            window,
            background,
            batch,
            ball: ball.id(),
            menu: menu.id(),
            objects: vec![ball, menu],
            time: WorldTime::default(),
        })
    }

    /// Advance the scene by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let dt = update_world_time(&mut self.time, dt);

        if input.grow.active {
            let growth = GROW_RATE * dt;
            if let Some(t) = self.ball_mut().and_then(|b| b.transform_mut()) {
                t.grow(growth, growth);
            }
        }
        if input.grow.just_pressed {
            debug!("Ball growing");
        }

        for obj in self.objects.iter_mut() {
            obj.update(dt);
        }
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.draw_sprite(&self.background_sprite());
        self.batch.draw(canvas);
        for obj in self.objects.iter_mut() {
            obj.draw(canvas);
        }
    }

    /// The background texture stretched over the whole window.
    fn background_sprite(&self) -> Sprite {
        let size = self.window.size();
        let mut sprite = Sprite::new(self.background.clone(), 1.0);
        sprite.center = Vector2 {
            x: size.x / 2.0,
            y: size.y / 2.0,
        };
        sprite.scale_x = size.x / self.background.width();
        sprite.scale_y = size.y / self.background.height();
        sprite
    }

    fn object(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    fn object_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn ball(&self) -> Option<&GameObject> {
        self.object(self.ball)
    }

    pub fn ball_mut(&mut self) -> Option<&mut GameObject> {
        self.object_mut(self.ball)
    }

    pub fn menu(&self) -> Option<&GameObject> {
        self.object(self.menu)
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Sprites drawn in one pass before the objects.
    pub fn batch(&self) -> &SpriteBatch {
        &self.batch
    }

    pub fn window(&self) -> &SharedSize {
        &self.window
    }

    pub fn time(&self) -> &WorldTime {
        &self.time
    }
}
