#[cfg(feature = "tracing")]
macro_rules! atrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_top_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! atrace {
    ($($tt:tt)*) => {};
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
macro_rules! awarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scroll_top_adapter", $($tt)*)
    };
}
