use memberwise::PubliclyInitializable;

/// Compile-pass fixture: tuple structs and enums expand to nothing, so a
/// hand-written `new` does not collide with a generated one.
#[derive(PubliclyInitializable)]
pub struct Meters(pub f64);

impl Meters {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }
}

#[derive(PubliclyInitializable)]
pub enum Shape {
    Circle,
    Square,
}

fn main() {
    let meters = Meters::new(2.5);
    assert!((meters.0 - 2.5).abs() < f64::EPSILON);
    let _ = [Shape::Circle, Shape::Square];
}
