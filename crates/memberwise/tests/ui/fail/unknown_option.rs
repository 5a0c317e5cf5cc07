use memberwise::PubliclyInitializable;

#[derive(PubliclyInitializable)]
#[memberwise(visibility = "crate")]
pub struct Unknown;

fn main() {}
