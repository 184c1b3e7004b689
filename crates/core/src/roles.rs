//! Account roles.
//!
//! A role is fixed when the account is created; there is no endpoint that
//! changes it.

use crate::status::define_text_enum;

define_text_enum! {
    /// Role attached to every user account.
    Role("role") {
        Customer = "customer",
        Admin = "admin",
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(Role::Customer.as_str(), "customer");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn default_role_is_customer() {
        assert_eq!(Role::default(), Role::Customer);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }
}
