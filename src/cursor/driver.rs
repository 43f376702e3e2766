use derive_new::new;

/// Error details as reported by the driver's error call.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub message: String,
    pub code: i32,
}

/// The cursor operations the lifecycle needs from the underlying driver.
///
/// Calls on one connection must not run concurrently; implementations follow
/// the driver's own threading rules.
pub trait CursorDriver {
    type Connection;
    type Statement;
    type Cursor;

    /// Allocates a new result-set handle on the connection.
    fn new_cursor(&self, conn: &Self::Connection) -> Result<Self::Cursor, DriverError>;

    /// Binds a handle to a placeholder of a prepared statement.
    fn bind_cursor(
        &self,
        stmt: &mut Self::Statement,
        placeholder: &str,
        cursor: &mut Self::Cursor,
        max_length: i32,
        type_code: u16,
    ) -> Result<(), DriverError>;
}
