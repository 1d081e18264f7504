//! GameObject container integration tests: attach, query, removal, and the
//! per-frame update/draw protocol.

use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::Color;

use synthpool::components::aspectratio::AspectRatioComponent;
use synthpool::components::boxrenderer::BoxRenderer;
use synthpool::components::screenrelative::ScreenRelativeTransform;
use synthpool::components::transform::Transform;
use synthpool::components::{Component, Owner};
use synthpool::gameobject::GameObject;
use synthpool::resources::surface::SharedSize;
use synthpool::systems::render::{Canvas, DrawList};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

type Journal = Rc<RefCell<Vec<String>>>;

/// Records every hook call into a shared journal.
struct Recorder {
    tag: &'static str,
    journal: Journal,
}

impl Recorder {
    fn new(tag: &'static str, journal: &Journal) -> Self {
        Self {
            tag,
            journal: journal.clone(),
        }
    }

    fn log(&self, hook: &str) {
        self.journal.borrow_mut().push(format!("{}:{}", self.tag, hook));
    }
}

impl Component for Recorder {
    fn start(&mut self, _owner: &mut Owner<'_>) {
        self.log("start");
    }

    fn update(&mut self, _owner: &mut Owner<'_>, _dt: f32) {
        self.log("update");
    }

    fn draw(&mut self, _owner: &Owner<'_>, _canvas: &mut dyn Canvas) {
        self.log("draw");
    }

    fn destroy(&mut self, _owner: &mut Owner<'_>) {
        self.log("destroy");
    }

    synthpool::impl_as_any!();
}

/// A second component kind, moving its owner right at 10 px/s.
struct Drift;

impl Component for Drift {
    fn update(&mut self, owner: &mut Owner<'_>, dt: f32) {
        if let Some(t) = owner.transform_mut() {
            t.position.x += 10.0 * dt;
        }
    }

    synthpool::impl_as_any!();
}

#[test]
fn add_then_query_by_kind() {
    let journal = Journal::default();
    let mut obj = GameObject::with_transform("Thing", Transform::new(1.0, 2.0));
    assert!(!obj.has_component::<Recorder>());
    assert!(obj.get_component::<Recorder>().is_none());
    assert!(obj.get_components::<Recorder>().is_empty());

    obj.add_component(Recorder::new("a", &journal));
    assert!(obj.has_component::<Recorder>());
    assert_eq!(obj.get_component::<Recorder>().map(|r| r.tag), Some("a"));
    assert_eq!(journal.borrow().as_slice(), ["a:start"]);
}

#[test]
fn duplicates_keep_insertion_order_and_remove_individually() {
    let journal = Journal::default();
    let mut obj = GameObject::new("Dup", None);
    let first = obj.add_component(Recorder::new("first", &journal)).id();
    obj.add_component(Recorder::new("second", &journal));

    let tags: Vec<_> = obj.get_components::<Recorder>().iter().map(|r| r.tag).collect();
    assert_eq!(tags, ["first", "second"]);

    assert!(obj.remove_component(first).is_some());
    assert_eq!(obj.get_component::<Recorder>().map(|r| r.tag), Some("second"));
    assert!(obj.has_component::<Recorder>());
    assert!(journal.borrow().contains(&"first:destroy".to_string()));
}

#[test]
fn removing_last_of_kind_prunes_it() {
    let journal = Journal::default();
    let mut obj = GameObject::new("Solo", None);
    let id = obj.add_component(Recorder::new("only", &journal)).id();
    obj.remove_component(id);
    assert!(!obj.has_component::<Recorder>());
    assert_eq!(obj.component_count(), 0);
    // second removal is a no-op
    assert!(obj.remove_component(id).is_none());
}

#[test]
fn removing_from_the_wrong_object_is_a_noop() {
    let journal = Journal::default();
    let mut a = GameObject::new("A", None);
    let mut b = GameObject::new("B", None);
    let id = a.add_component(Recorder::new("a", &journal)).id();
    assert!(b.remove_component(id).is_none());
    assert!(a.contains(id));
    assert!(!journal.borrow().iter().any(|e| e.ends_with("destroy")));
}

#[test]
fn remove_all_destroys_everything_in_order() {
    let journal = Journal::default();
    let mut obj = GameObject::new("Many", None);
    obj.add_component(Recorder::new("r1", &journal));
    obj.add_component(Drift);
    obj.add_component(Recorder::new("r2", &journal));
    journal.borrow_mut().clear();

    obj.remove_all_components();
    assert_eq!(obj.component_count(), 0);
    assert!(obj.get_all_components().is_empty());
    assert_eq!(journal.borrow().as_slice(), ["r1:destroy", "r2:destroy"]);
}

#[test]
fn update_and_draw_visit_every_component() {
    let journal = Journal::default();
    let mut obj = GameObject::with_transform("Ticker", Transform::new(0.0, 0.0));
    obj.add_component(Recorder::new("r", &journal));
    obj.add_component(Drift);
    journal.borrow_mut().clear();

    obj.update(0.5);
    let mut list = DrawList::new();
    obj.draw(&mut list);

    assert_eq!(journal.borrow().as_slice(), ["r:update", "r:draw"]);
    assert!(approx_eq(obj.transform().unwrap().position.x, 5.0));
}

#[test]
fn screen_relative_on_800x600_window() {
    let window = SharedSize::new(800.0, 600.0);
    let mut obj = GameObject::with_transform("Centered", Transform::default());
    obj.add_component(ScreenRelativeTransform::new(window, 0.5, 0.5, 1.0, 1.0));

    for _ in 0..3 {
        obj.update(0.016);
        let t = obj.transform().unwrap();
        assert_eq!((t.position.x, t.position.y), (400.0, 300.0));
        assert_eq!((t.scale.x, t.scale.y), (800.0, 600.0));
    }
}

#[test]
fn aspect_ratio_follows_x() {
    let mut obj = GameObject::with_transform("Box", Transform::default().with_scale_xy(10.0, 3.0));
    obj.add_component(AspectRatioComponent::new(2.0));
    obj.update(0.016);
    let t = obj.transform().unwrap();
    assert_eq!((t.scale.x, t.scale.y), (10.0, 20.0));
}

#[test]
fn object_can_be_laid_out_against_another_object() {
    let window = SharedSize::new(800.0, 600.0);
    let mut panel = GameObject::with_transform("Panel", Transform::default());
    panel.add_component(ScreenRelativeTransform::new(window, 0.5, 0.5, 0.5, 0.5));
    panel.update(0.016);

    let mut badge = GameObject::with_transform("Badge", Transform::default());
    badge.add_component(ScreenRelativeTransform::new(panel.surface(), 0.5, 0.0, 0.1, 0.1));
    badge.add_component(BoxRenderer::new(Color::RED));
    badge.update(0.016);

    let t = badge.transform().unwrap();
    assert_eq!(t.position.x, 200.0);
    assert_eq!(t.position.y, 0.0);
    assert!(approx_eq(t.scale.x, 40.0));
    assert!(approx_eq(t.scale.y, 30.0));

    let mut list = DrawList::new();
    badge.draw(&mut list);
    assert_eq!(list.rect_draws(), 1);
}

#[test]
fn display_shows_name_and_position() {
    let obj = GameObject::with_transform("Ball", Transform::new(3.0, 4.0));
    let text = obj.to_string();
    assert!(text.starts_with("Name: Ball; GameObject(Position: "));
}
