/*
 * Responsibility
 * - Handler から見える「リクエスト単位のコンテキスト」と、認証済み主体の型
 * - middleware が RequestContext を組み立てて request extensions に格納し、
 *   handler は extractor 経由でのみ参照する
 *
 * Notes
 * - 認証ロジック (token の検証) は services/auth 側の責務
 * - ここは「型（契約）」として固定化する
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handler に公開してよいフィールドだけを持つユーザーの射影
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedUser {
    pub id: String,
    pub role: String,
}

impl SelectedUser {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// State owned by one inbound request for its whole lifetime.
///
/// - `authenticated_user` is the identity slot: `None` means no identity was
///   established for this request (anonymous), which is a normal state.
/// - The slot is write-once. The authentication step fills it at most once and
///   downstream handlers only read it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    received_at: DateTime<Utc>,
    authenticated_user: Option<SelectedUser>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            received_at: Utc::now(),
            authenticated_user: None,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Attach the authenticated identity.
    ///
    /// The first write wins: if the slot is already occupied it is left as is
    /// and `user` is handed back in `Err` (same shape as `OnceCell::set`).
    pub fn set_authenticated_user(&mut self, user: SelectedUser) -> Result<(), SelectedUser> {
        if self.authenticated_user.is_some() {
            return Err(user);
        }
        self.authenticated_user = Some(user);
        Ok(())
    }

    /// The attached identity, or `None` when the request is unauthenticated.
    pub fn authenticated_user(&self) -> Option<&SelectedUser> {
        self.authenticated_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_is_anonymous() {
        let c1 = RequestContext::new("c1");
        assert!(c1.authenticated_user().is_none());
        assert!(!c1.is_authenticated());
    }

    #[test]
    fn set_then_get_returns_the_same_user() {
        let mut c2 = RequestContext::new("c2");
        let user = SelectedUser::new("u1", "admin");

        assert!(c2.set_authenticated_user(user.clone()).is_ok());

        assert_eq!(c2.authenticated_user(), Some(&user));
        assert!(c2.is_authenticated());
    }

    #[test]
    fn repeated_reads_are_stable() {
        let mut ctx = RequestContext::new("r");
        assert_eq!(ctx.authenticated_user(), ctx.authenticated_user());

        ctx.set_authenticated_user(SelectedUser::new("u1", "admin")).unwrap();
        let first = ctx.authenticated_user().cloned();
        let second = ctx.authenticated_user().cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn setting_one_context_leaves_another_untouched() {
        let mut c3 = RequestContext::new("c3");
        let c4 = RequestContext::new("c4");

        c3.set_authenticated_user(SelectedUser::new("u3", "member")).unwrap();

        assert!(c3.is_authenticated());
        assert!(c4.authenticated_user().is_none());
    }

    #[test]
    fn second_write_is_rejected_and_first_user_kept() {
        let mut ctx = RequestContext::new("w");
        let first = SelectedUser::new("u1", "admin");
        let second = SelectedUser::new("u2", "member");

        ctx.set_authenticated_user(first.clone()).unwrap();
        let rejected = ctx.set_authenticated_user(second.clone());

        assert_eq!(rejected, Err(second));
        assert_eq!(ctx.authenticated_user(), Some(&first));
    }

    #[test]
    fn clone_carries_the_slot() {
        let mut ctx = RequestContext::new("k");
        ctx.set_authenticated_user(SelectedUser::new("u1", "admin")).unwrap();

        let copy = ctx.clone();
        assert_eq!(copy.request_id(), "k");
        assert_eq!(copy.received_at(), ctx.received_at());
        assert_eq!(copy.authenticated_user(), ctx.authenticated_user());
    }

    #[test]
    fn has_role_matches_exactly() {
        let user = SelectedUser::new("u1", "admin");
        assert!(user.has_role("admin"));
        assert!(!user.has_role("Admin"));
        assert!(!user.has_role("member"));
    }
}
