use models::user::{Role, User};

/// Outcome of an authorization check. `RedirectToHome` is deliberately
/// silent; a role mismatch is navigation, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Permit,
    RedirectToLogin,
    RedirectToHome,
}

/// Pure, stateless guard: evaluated on every navigation, no memory of
/// prior decisions. An empty `required` set means "any authenticated
/// identity".
///
/// # Examples
/// ```
/// use models::user::Role;
/// use service::access::{evaluate, AccessDecision};
///
/// assert_eq!(evaluate(None, &[]), AccessDecision::RedirectToLogin);
/// assert_eq!(evaluate(None, &[Role::Admin]), AccessDecision::RedirectToLogin);
/// ```
pub fn evaluate(user: Option<&User>, required: &[Role]) -> AccessDecision {
    match user {
        None => AccessDecision::RedirectToLogin,
        Some(u) if required.is_empty() || required.contains(&u.role) => AccessDecision::Permit,
        Some(_) => AccessDecision::RedirectToHome,
    }
}
