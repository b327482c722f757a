/// Receives full-reset notifications from a [`FeedStore`](super::FeedStore).
///
/// Every `model_about_to_reset` is followed by exactly one `model_reset`,
/// after which all previously read rows are invalid.
pub trait ModelObserver: Send {
    fn model_about_to_reset(&self) {}

    /// `count` is the row count of the new view
    fn model_reset(&self, count: usize);
}
