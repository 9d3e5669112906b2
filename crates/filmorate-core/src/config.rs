/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `database_url` is read from
/// `DATABASE_URL`, `filmorate_port` from `FILMORATE_PORT`, and so on.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
