/// A login URL split into the identity service and the session code.
///
/// Login URLs have the form `<identity service>/<page>?id=<short_uid>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginUrl {
    pub identity_service: String,
    pub short_uid: String,
}

impl LoginUrl {
    pub fn parse(url: &str) -> Option<Self> {
        let (identity_service, last) = url.trim().rsplit_once('/')?;
        let short_uid = last.rsplit('=').next().unwrap_or(last);

        if identity_service.is_empty() || short_uid.is_empty() {
            return None;
        }

        Some(Self {
            identity_service: identity_service.to_string(),
            short_uid: short_uid.to_string(),
        })
    }
}
