/// Flat shape of a `users` row: address, geo and company folded into columns
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub lat: String,
    pub lng: String,
    pub company_name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Row counts of the three mirrored tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub posts: i64,
    pub comments: i64,
}
