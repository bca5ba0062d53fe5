//! Pure mappings between the nested user shape and the flat table rows.

use std::collections::HashMap;

use usersync_types::{
    Address, Comment, Company, Geo, NewComment, NewPost, Post, PostWithComments, User,
    UserAggregate,
};

use crate::db::UserRow;

/// Fold address, geo and company into a single `users` row
pub fn flatten_user(user: &User) -> UserRow {
    UserRow {
        id: user.id,
        name: user.name.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        phone: user.phone.clone(),
        website: user.website.clone(),
        street: user.address.street.clone(),
        suite: user.address.suite.clone(),
        city: user.address.city.clone(),
        zipcode: user.address.zipcode.clone(),
        lat: user.address.geo.lat.clone(),
        lng: user.address.geo.lng.clone(),
        company_name: user.company.name.clone(),
        catch_phrase: user.company.catch_phrase.clone(),
        bs: user.company.bs.clone(),
    }
}

/// Rebuild the nested user from its row
pub fn unflatten_user(row: UserRow) -> User {
    User {
        id: row.id,
        name: row.name,
        username: row.username,
        email: row.email,
        address: Address {
            street: row.street,
            suite: row.suite,
            city: row.city,
            zipcode: row.zipcode,
            geo: Geo {
                lat: row.lat,
                lng: row.lng,
            },
        },
        phone: row.phone,
        website: row.website,
        company: Company {
            name: row.company_name,
            catch_phrase: row.catch_phrase,
            bs: row.bs,
        },
    }
}

/// Attach each comment to its post and nest the posts under the user.
///
/// Comments keep their relative order. Comments whose post is not in `posts`
/// are dropped.
pub fn assemble_aggregate(row: UserRow, posts: Vec<Post>, comments: Vec<Comment>) -> UserAggregate {
    let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_post.entry(comment.post_id).or_default().push(comment);
    }

    let posts = posts
        .into_iter()
        .map(|post| PostWithComments {
            comments: by_post.remove(&post.id).unwrap_or_default(),
            post,
        })
        .collect();

    UserAggregate {
        user: unflatten_user(row),
        posts,
    }
}

/// Post row for a submitted post; the owner is always the enclosing user
pub fn owned_post(user_id: i64, post: &NewPost) -> Post {
    Post {
        user_id,
        id: post.id,
        title: post.title.clone(),
        body: post.body.clone(),
    }
}

/// Comment row for a submitted comment; the owner is always the enclosing post
pub fn owned_comment(post_id: i64, comment: &NewComment) -> Comment {
    Comment {
        post_id,
        id: comment.id,
        name: comment.name.clone(),
        email: comment.email.clone(),
        body: comment.body.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture_user() -> User {
        User {
            id: 101,
            name: "Name".to_string(),
            username: "handle".to_string(),
            email: "a@b.c".to_string(),
            address: Address {
                street: "Main".to_string(),
                suite: "1".to_string(),
                city: "X".to_string(),
                zipcode: "00000".to_string(),
                geo: Geo {
                    lat: "1".to_string(),
                    lng: "2".to_string(),
                },
            },
            phone: "555".to_string(),
            website: "x.org".to_string(),
            company: Company {
                name: "Acme".to_string(),
                catch_phrase: "Go".to_string(),
                bs: "b".to_string(),
            },
        }
    }

    fn comment(id: i64, post_id: i64) -> Comment {
        Comment {
            post_id,
            id,
            name: "N".to_string(),
            email: "e@x".to_string(),
            body: "Bd".to_string(),
        }
    }

    fn post(id: i64) -> Post {
        Post {
            user_id: 101,
            id,
            title: "T".to_string(),
            body: "B".to_string(),
        }
    }

    #[test]
    fn test_flatten_user_columns() {
        let row = flatten_user(&fixture_user());
        assert_eq!(row.street, "Main");
        assert_eq!(row.lat, "1");
        assert_eq!(row.lng, "2");
        assert_eq!(row.company_name, "Acme");
        assert_eq!(row.catch_phrase, "Go");
    }

    #[test]
    fn test_assemble_groups_comments_by_post() {
        let row = flatten_user(&fixture_user());
        let aggregate = assemble_aggregate(
            row,
            vec![post(1), post(2), post(3)],
            vec![comment(10, 1), comment(20, 2), comment(11, 1), comment(99, 42)],
        );

        assert_eq!(aggregate.user, fixture_user());
        assert_eq!(aggregate.posts.len(), 3);
        assert_eq!(aggregate.posts[0].comments, vec![comment(10, 1), comment(11, 1)]);
        assert_eq!(aggregate.posts[1].comments, vec![comment(20, 2)]);
        assert!(aggregate.posts[2].comments.is_empty());
    }

    #[test]
    fn test_owned_rows_force_owner_ids() {
        let new_post = NewPost {
            id: 5001,
            title: "T".to_string(),
            body: "B".to_string(),
            comments: vec![NewComment {
                id: 9001,
                name: "N".to_string(),
                email: "e@x".to_string(),
                body: "Bd".to_string(),
            }],
        };

        assert_eq!(owned_post(101, &new_post).user_id, 101);
        assert_eq!(owned_comment(5001, &new_post.comments[0]), comment(9001, 5001));
    }

    fn arb_user() -> impl Strategy<Value = User> {
        (
            any::<i64>(),
            prop::collection::vec(".*", 13),
        )
            .prop_map(|(id, f)| User {
                id,
                name: f[0].clone(),
                username: f[1].clone(),
                email: f[2].clone(),
                address: Address {
                    street: f[3].clone(),
                    suite: f[4].clone(),
                    city: f[5].clone(),
                    zipcode: f[6].clone(),
                    geo: Geo {
                        lat: f[7].clone(),
                        lng: f[8].clone(),
                    },
                },
                phone: f[9].clone(),
                website: f[10].clone(),
                company: Company {
                    name: f[11].clone(),
                    catch_phrase: f[12].clone(),
                    bs: f[0].clone(),
                },
            })
    }

    proptest! {
        #[test]
        fn prop_flatten_then_unflatten_is_identity(user in arb_user()) {
            prop_assert_eq!(unflatten_user(flatten_user(&user)), user);
        }

        #[test]
        fn prop_every_comment_lands_once(
            post_ids in prop::collection::btree_set(0i64..50, 0..10),
            owners in prop::collection::vec(0i64..60, 0..40),
        ) {
            let posts: Vec<Post> = post_ids.iter().map(|&id| post(id)).collect();
            let comments: Vec<Comment> = owners
                .iter()
                .enumerate()
                .map(|(i, &owner)| comment(i as i64, owner))
                .collect();

            let aggregate = assemble_aggregate(flatten_user(&fixture_user()), posts, comments.clone());

            for entry in &aggregate.posts {
                let expected: Vec<Comment> = comments
                    .iter()
                    .filter(|c| c.post_id == entry.post.id)
                    .cloned()
                    .collect();
                prop_assert_eq!(&entry.comments, &expected);
            }

            let attached: usize = aggregate.posts.iter().map(|p| p.comments.len()).sum();
            let expected = comments.iter().filter(|c| post_ids.contains(&c.post_id)).count();
            prop_assert_eq!(attached, expected);
        }
    }
}
