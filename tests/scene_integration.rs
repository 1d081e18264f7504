//! Scene integration tests: sprite batching, frame animation, and a full
//! setup/update/draw cycle of the game against headless textures.

use synthpool::components::animation::FrameAnimation;
use synthpool::components::spriterenderer::SpriteRendererComponent;
use synthpool::components::transform::Transform;
use synthpool::game::Game;
use synthpool::gameobject::GameObject;
use synthpool::resources::gameconfig::GameConfig;
use synthpool::resources::input::InputState;
use synthpool::resources::spritebatch::SpriteBatch;
use synthpool::resources::surface::SharedSize;
use synthpool::resources::texturestore::{AssetError, TextureCatalog};
use synthpool::systems::render::{DrawCommand, DrawList};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn catalog() -> TextureCatalog {
    let config = GameConfig::new();
    TextureCatalog::new()
        .with(config.background_path, 640.0, 480.0)
        .with(config.ball_path, 128.0, 128.0)
        .with("walk0.png", 16.0, 16.0)
        .with("walk1.png", 16.0, 16.0)
        .with("walk2.png", 16.0, 16.0)
}

#[test]
fn animation_three_frames_at_two_fps() {
    let mut loader = catalog();
    let mut anim = FrameAnimation::new(
        &mut loader,
        &["walk0.png", "walk1.png", "walk2.png"],
        2.0,
        true,
        true,
    )
    .unwrap();
    anim.bind();
    anim.on_update(0.6);
    assert_eq!(anim.frame(), 1);
    assert!(approx_eq(anim.elapsed(), 0.1));
    assert_eq!(anim.current_texture().map(|t| t.key()), Some("walk1.png"));
}

#[test]
fn animated_renderer_shows_current_frame() {
    let mut loader = catalog();
    let anim = FrameAnimation::new(&mut loader, &["walk0.png", "walk1.png"], 4.0, true, true).unwrap();
    let mut obj = GameObject::with_transform("Walker", Transform::new(50.0, 50.0).with_scale(32.0));
    obj.add_component(SpriteRendererComponent::new(&mut loader, "walk0.png", 1.0).unwrap())
        .set_animation(anim);

    obj.update(0.25);
    let mut list = DrawList::new();
    obj.draw(&mut list);
    assert_eq!(list.sprite_draws("walk1.png"), 1);
    assert_eq!(list.sprite_draws("walk0.png"), 0);
}

#[test]
fn moving_between_batches() {
    let mut loader = catalog();
    let first = SpriteBatch::new();
    let second = SpriteBatch::new();
    let mut obj = GameObject::with_transform("Ball", Transform::default());
    let mut renderer = obj.add_component(SpriteRendererComponent::new(&mut loader, "walk0.png", 1.0).unwrap());
    renderer.add_to_batch(&first);
    renderer.add_to_batch(&second);
    assert!(!first.contains(renderer.sprite()));
    assert!(second.contains(renderer.sprite()));
}

#[test]
fn batched_sprite_is_drawn_once_by_the_batch() {
    let mut loader = catalog();
    let batch = SpriteBatch::new();
    let mut obj = GameObject::with_transform("Ball", Transform::new(10.0, 10.0).with_scale(16.0));
    obj.add_component(SpriteRendererComponent::new(&mut loader, "walk0.png", 1.0).unwrap())
        .add_to_batch(&batch);

    let mut list = DrawList::new();
    obj.draw(&mut list);
    assert!(list.is_empty());

    batch.draw(&mut list);
    assert_eq!(list.sprite_draws("walk0.png"), 1);
}

#[test]
fn missing_texture_is_reported() {
    let mut loader = catalog();
    let err = SpriteRendererComponent::new(&mut loader, "missing.png", 1.0).err();
    assert!(matches!(err, Some(AssetError::NotFound { path }) if path == "missing.png"));
}

#[test]
fn game_frame_cycle() {
    let mut loader = catalog();
    let window = SharedSize::new(800.0, 600.0);
    let mut game = Game::setup(&mut loader, &GameConfig::new(), window.clone()).unwrap();
    let input = InputState::default();

    // two frames: the ball sprite syncs with the layout from the previous frame
    game.update(0.016, &input);
    game.update(0.016, &input);

    let mut list = DrawList::new();
    game.draw(&mut list);
    let ball = list
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Sprite {
                texture_key, bounds, ..
            } if texture_key.ends_with("RedBall.png") => Some(*bounds),
            _ => None,
        })
        .unwrap();
    assert!(approx_eq(ball.width, 800.0));
    assert!(approx_eq(ball.height, 800.0));
    assert!(approx_eq(ball.x, 0.0));
    assert!(approx_eq(ball.y, -100.0));

    window.set(400.0, 400.0);
    game.update(0.016, &input);
    let menu = game.menu().unwrap().transform().unwrap();
    assert_eq!(menu.position.x, 200.0);
    assert!(approx_eq(menu.scale.x, 140.0));
}
