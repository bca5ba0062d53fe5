/// SQL schema for the mirror database
/// Owning ids are plain columns: posts and comments may outlive their parents
pub const SCHEMA: &str = r#"
-- Users table, address and company flattened into columns
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT,
    username TEXT,
    email TEXT,
    phone TEXT,
    website TEXT,
    street TEXT,
    suite TEXT,
    city TEXT,
    zipcode TEXT,
    lat TEXT,
    lng TEXT,
    companyName TEXT,
    catchPhrase TEXT,
    bs TEXT
);

-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY,
    userId INTEGER,
    title TEXT,
    body TEXT
);

CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(userId);

-- Comments table
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY,
    postId INTEGER,
    name TEXT,
    email TEXT,
    body TEXT
);

CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(postId);
"#;
