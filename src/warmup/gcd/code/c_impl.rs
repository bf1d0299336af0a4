//! FFI bindings for the C port of Euclid's algorithm.

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn gcd_euclid_c(a: u64, b: u64) -> u64;
    }
}

/// C Euclid
#[cfg(c_implementation_active)]
pub fn gcd_c_euclid(a: u64, b: u64) -> u64 {
    // SAFETY: pure function over two integers
    unsafe { ffi::gcd_euclid_c(a, b) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub for missing C compiler; never registered as a variant
#[cfg(not(c_implementation_active))]
pub fn gcd_c_euclid(_a: u64, _b: u64) -> u64 {
    unreachable!("C implementation not compiled")
}
