/// Turns a failure into "nothing happens", leaving a trace of where it was swallowed.
pub trait ResultExt<T> {
	fn ok_or_log(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
	#[track_caller]
	fn ok_or_log(self) -> Option<T> {
		match self {
			Ok(value) => Some(value),
			Err(error) => {
				let caller = std::panic::Location::caller();
				tracing::error!(%error, %caller, "discarding error");
				None
			}
		}
	}
}
