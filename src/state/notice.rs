// Transient toast text; `id` lets a stale dismiss timer leave a newer notice alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}
