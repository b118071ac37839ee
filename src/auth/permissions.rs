use uuid::Uuid;

use crate::auth::repo_types::{Identity, Role};

/// True iff the identity's role is one of `allowed`.
pub fn has_role(identity: &Identity, allowed: &[Role]) -> bool {
    allowed.contains(&identity.role)
}

/// Value comparison over typed ids.
pub fn is_same_id(a: Uuid, b: Uuid) -> bool {
    a == b
}

/// Admins may act on any resource; everyone else only on their own.
pub fn is_author_or_admin(identity: &Identity, author_id: Uuid) -> bool {
    identity.role == Role::Admin || is_same_id(identity.id, author_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "a@x.com".into(),
            role,
        }
    }

    #[test]
    fn has_role_matches_membership() {
        let user = identity(Role::User);
        let moderator = identity(Role::Moderator);
        let admin = identity(Role::Admin);

        assert!(has_role(&admin, &[Role::Admin]));
        assert!(!has_role(&user, &[Role::Admin]));
        assert!(!has_role(&moderator, &[Role::Admin]));
        assert!(has_role(&moderator, &[Role::Moderator, Role::Admin]));
        assert!(!has_role(&user, &[]));
    }

    #[test]
    fn author_may_act_on_own_resource() {
        let author = identity(Role::User);
        assert!(is_author_or_admin(&author, author.id));
    }

    #[test]
    fn non_author_non_admin_is_denied() {
        let user = identity(Role::User);
        let moderator = identity(Role::Moderator);
        let other = Uuid::new_v4();
        assert!(!is_author_or_admin(&user, other));
        assert!(!is_author_or_admin(&moderator, other));
    }

    #[test]
    fn admin_may_act_on_any_resource() {
        let admin = identity(Role::Admin);
        assert!(is_author_or_admin(&admin, Uuid::new_v4()));
    }

    #[test]
    fn value_equal_ids_compare_equal_across_instances() {
        let raw = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";
        let a = Uuid::parse_str(raw).unwrap();
        let b = Uuid::parse_str(raw).unwrap();
        assert!(is_same_id(a, b));

        let mut author = identity(Role::User);
        author.id = a;
        assert!(is_author_or_admin(&author, b));
    }
}
