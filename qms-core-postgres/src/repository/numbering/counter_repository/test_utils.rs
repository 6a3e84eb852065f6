#[cfg(test)]
pub mod test_utils {
    use uuid::Uuid;

    /// Scope key in the shape the formatter composes. Tests build keys around
    /// a fresh organization id, so runs never collide even though counter
    /// rows are append-only and shared-database tests leave them behind.
    pub fn test_scope_key(prefix: &str, organization_id: Uuid, discriminator: &str) -> String {
        format!("{prefix}_{organization_id}_{discriminator}")
    }
}
