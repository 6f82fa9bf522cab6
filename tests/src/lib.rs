//! End-to-end checks that run exam documents through the public API of
//! every engine crate.

#[cfg(test)]
mod exam_flow;
#[cfg(test)]
mod thresholds;

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
