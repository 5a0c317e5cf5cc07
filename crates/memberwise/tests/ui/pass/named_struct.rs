use memberwise::PubliclyInitializable;

/// Compile-pass fixture: optional and defaulted-looking fields are all
/// required constructor parameters.
#[derive(PubliclyInitializable)]
pub struct Account {
    pub id: u64,
    pub email: Option<String>,
    pub balance: i128,
}

fn main() {
    let account = Account::new(1, None, -5);
    assert_eq!(account.id, 1);
    assert!(account.email.is_none());
    assert_eq!(account.balance, -5);
}
