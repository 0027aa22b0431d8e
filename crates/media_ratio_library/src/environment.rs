//! What the host tells us about the current request.

/// Host context used to decide which agents attach their hooks.
///
/// ```
/// use media_ratio_library::HostEnvironment;
///
/// let env = HostEnvironment::builder()
///     .is_admin(true)
///     .can_upload_files(true)
///     .build()
///     .unwrap();
/// assert!(!env.is_cli());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(default)]
pub struct HostEnvironment {
    /// Request is for the admin dashboard
    is_admin: bool,
    /// Running under the host's command line
    is_cli: bool,
    /// Current user may upload media
    can_upload_files: bool,
}

impl HostEnvironment {
    /// Start building an environment; every flag defaults to `false`.
    pub fn builder() -> HostEnvironmentBuilder {
        HostEnvironmentBuilder::default()
    }

    /// A command-line invocation with no logged-in user.
    pub fn cli() -> Self {
        Self {
            is_cli: true,
            ..Self::default()
        }
    }

    /// An admin dashboard request from a user who can upload media.
    pub fn media_admin() -> Self {
        Self {
            is_admin: true,
            can_upload_files: true,
            ..Self::default()
        }
    }
}
