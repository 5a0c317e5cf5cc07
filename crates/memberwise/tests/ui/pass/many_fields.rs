use memberwise::PubliclyInitializable;

/// Compile-pass fixture: one parameter per field, however wide the record.
#[derive(PubliclyInitializable)]
pub struct Wide {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub g: u8,
    pub h: u8,
}

fn main() {
    let wide = Wide::new(1, 2, 3, 4, 5, 6, 7, 8);
    assert_eq!(wide.a + wide.h, 9);
}
