use memberwise::PubliclyInitializable;

#[derive(PubliclyInitializable)]
#[memberwise(constructor = 7)]
pub struct Bad;

fn main() {}
