//! Loading/error lifecycle of one read projection.

/// One server-backed read view: its data, an in-flight flag, and an inline
/// error message.
///
/// `begin` marks a request in flight; `succeed` and `fail` both clear the
/// flag, so a completed request never leaks a loading state. `fail` leaves
/// the previous data untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Projection<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// A settled, non-errored projection; what the tables render from.
    pub fn ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_clears_loading_and_error() {
        let mut p = Projection::<Vec<u32>>::default();
        p.begin();
        assert!(p.loading);
        p.succeed(vec![1, 2]);
        assert!(p.ready());
        assert_eq!(p.data, vec![1, 2]);
    }

    #[test]
    fn failure_clears_loading_and_keeps_prior_data() {
        let mut p = Projection::<Vec<u32>>::default();
        p.succeed(vec![7]);
        p.begin();
        p.fail("Failed to load scores");
        assert!(!p.loading);
        assert_eq!(p.error.as_deref(), Some("Failed to load scores"));
        assert_eq!(p.data, vec![7], "stale data outlives a failed refresh");
    }

    #[test]
    fn begin_clears_a_previous_error() {
        let mut p = Projection::<Vec<u32>>::default();
        p.fail("boom");
        p.begin();
        assert!(p.loading);
        assert_eq!(p.error, None);
    }
}
