/// Forwards to the `log` crate when the `log` feature is enabled.
///
/// Without the feature the arguments are still type-checked but nothing is formatted.
macro_rules! route_log {
	($level:ident, $($arg:tt)+) => {
		#[cfg(feature = "log")]
		::log::$level!($($arg)+);
		#[cfg(not(feature = "log"))]
		let _ = || {
			let _ = format_args!($($arg)+);
		};
	};
}
pub(crate) use route_log;
