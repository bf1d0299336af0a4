//! FFI bindings for the C port of the iterative search.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn binary_search_first_c(keys: *const i64, len: usize, query: i64) -> i64;
    }
}

/// C iterative bisection
#[cfg(c_implementation_active)]
pub fn binary_search_c_iterative(keys: &[i64], query: i64) -> Option<usize> {
    // SAFETY: the C side only reads keys[0..len)
    let index = unsafe { ffi::binary_search_first_c(keys.as_ptr(), keys.len(), query) };
    usize::try_from(index).ok()
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub for missing C compiler; never registered as a variant
#[cfg(not(c_implementation_active))]
pub fn binary_search_c_iterative(_keys: &[i64], _query: i64) -> Option<usize> {
    unreachable!("C implementation not compiled")
}
