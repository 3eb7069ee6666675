#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Id of the successor. Each id is the successor of at most one node.
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node { value, next: None }
    }

    /// Is this the last node of its chain?
    pub(crate) fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
