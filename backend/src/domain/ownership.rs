//! Ownership authorization for mutating blog operations.
//!
//! Delete is the only owner-restricted operation; liking deliberately skips
//! this check.

use crate::domain::auth::Identity;
use crate::domain::blog::Blog;
use crate::domain::error::Error;

/// Check that `identity` owns `blog`.
///
/// Pure predicate used by delete before any mutation. A non-owner receives
/// `Forbidden` and must observe the blog unchanged and still listed.
pub fn assert_owner(identity: &Identity, blog: &Blog) -> Result<(), Error> {
    if blog.owner() == identity.user_id() {
        Ok(())
    } else {
        Err(Error::forbidden("only the owner may delete a blog"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::blog::{BlogDraft, BlogId};
    use crate::domain::user::UserId;
    use crate::domain::ErrorCode;

    fn blog_owned_by(owner: UserId) -> Blog {
        let draft = BlogDraft::try_from_parts("T", Some("A"), "http://u").expect("valid draft");
        Blog::create(BlogId::random(), draft, owner)
    }

    #[test]
    fn owner_passes() {
        let owner = UserId::random();
        let blog = blog_owned_by(owner);
        assert_owner(&Identity::new(owner), &blog).expect("owner is authorized");
    }

    #[test]
    fn non_owner_is_forbidden() {
        let blog = blog_owned_by(UserId::random());
        let err = assert_owner(&Identity::new(UserId::random()), &blog)
            .expect_err("non-owner must be rejected");
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
