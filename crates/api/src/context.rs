use printerp_auth::{JwtClaims, PrincipalId, Role};
use printerp_core::TenantId;

/// Authenticated request context: who is calling, on behalf of which tenant.
///
/// Inserted into request extensions by [`crate::middleware::auth_middleware`];
/// immutable for the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    tenant_id: TenantId,
    principal_id: PrincipalId,
    roles: Vec<Role>,
}

impl RequestContext {
    pub fn new(tenant_id: TenantId, principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self {
            tenant_id,
            principal_id,
            roles,
        }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl From<JwtClaims> for RequestContext {
    fn from(claims: JwtClaims) -> Self {
        Self::new(claims.tenant_id, claims.sub, claims.roles)
    }
}
