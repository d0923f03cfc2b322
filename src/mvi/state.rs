/// State owned by a reducer.
///
/// `Default` is the resting state (Home, a hidden popup) and is what
/// `dispatch_mvi!` leaves behind while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
