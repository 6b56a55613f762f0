//! Role checks.

use crm_app::auth::USER_ROLE;
use salvo::prelude::*;
use tracing::warn;

use crate::extensions::*;

/// Reject callers whose principal lacks the `user` role.
///
/// Must run after [`super::middleware::handler`].
#[salvo::handler]
pub(crate) async fn require_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let principal = match depot.principal_or_401() {
        Ok(principal) => principal,
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    if !principal.has_role(USER_ROLE) {
        warn!(token_uuid = %principal.token_uuid, "caller lacks the user role");

        res.render(StatusError::forbidden().brief("Missing required role"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
