/// Return early with a failed status.
///
/// Evaluates an expression of type [`StatusCode`](crate::StatusCode). On
/// failure the enclosing function returns that status untouched; on success
/// execution continues. First failure wins: no later step runs and the
/// facility/code are never rewritten.
///
/// ```
/// use fwstatus::{codes, status_try, StatusCode};
///
/// fn probe(addr: u8) -> StatusCode {
///     if addr > 0x7F { codes::i2c::INVALID_INPUT } else { StatusCode::SUCCESS }
/// }
///
/// fn init() -> StatusCode {
///     status_try!(probe(0x68));
///     status_try!(probe(0x80));
///     status_try!(probe(0x10)); // never reached
///     StatusCode::SUCCESS
/// }
///
/// assert_eq!(init(), codes::i2c::INVALID_INPUT);
/// ```
///
/// With the `debug-logging` feature every propagated failure is traced
/// together with the call site.
#[macro_export]
macro_rules! status_try {
    ($status:expr) => {{
        let status: $crate::StatusCode = $status;
        if status.failed() {
            $crate::macros::__on_propagate(status, file!(), line!());
            return status;
        }
    }};
}

/// Define a facility's catalog of failure codes.
///
/// Expands to one `pub const` per entry plus an `ALL` table pairing every
/// code with its symbolic name. Drivers outside this crate use it to declare
/// catalogs for their own facilities.
///
/// ```
/// use fwstatus::Facility;
///
/// pub mod spi {
///     fwstatus::status_catalog! {
///         fwstatus::Facility::new(9);
///         /// Clock configuration rejected
///         BAD_CLOCK = 0,
///         BUSY = 1,
///     }
/// }
///
/// assert_eq!(spi::BUSY.facility(), Facility::new(9));
/// assert_eq!(spi::BUSY.code(), 1);
/// assert_eq!(spi::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! status_catalog {
    (
        $facility:expr;
        $( $(#[$meta:meta])* $name:ident = $code:literal ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::StatusCode = $crate::StatusCode::failure($facility, $code);
        )*

        /// Every code in this catalog with its symbolic name.
        pub const ALL: &[($crate::StatusCode, &str)] = &[
            $( ($name, stringify!($name)) ),*
        ];
    };
}

#[doc(hidden)]
#[inline]
pub fn __on_propagate(status: crate::StatusCode, file: &'static str, line: u32) {
    cfg_if::cfg_if! {
        if #[cfg(feature = "debug-logging")] {
            crate::kprint::_klog_impl(
                crate::kprint::LogLevel::Trace,
                format_args!("propagating {} from {}:{}", status, file, line),
            );
        } else {
            let _ = (status, file, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{codes, Facility, StatusCode};

    fn step(result: StatusCode, ran: &mut u32) -> StatusCode {
        *ran += 1;
        result
    }

    fn sequence(a: StatusCode, b: StatusCode, c: StatusCode, ran: &mut u32) -> StatusCode {
        status_try!(step(a, ran));
        status_try!(step(b, ran));
        status_try!(step(c, ran));
        StatusCode::SUCCESS
    }

    #[test]
    fn all_succeed() {
        let mut ran = 0;
        let s = sequence(StatusCode::SUCCESS, StatusCode::SUCCESS, StatusCode::SUCCESS, &mut ran);
        assert_eq!(s, StatusCode::SUCCESS);
        assert_eq!(ran, 3);
    }

    #[test]
    fn first_failure_wins() {
        let mut ran = 0;
        let s = sequence(
            StatusCode::SUCCESS,
            codes::i2c::NACK_ON_ADDR,
            codes::uart::WRITE_FAILED,
            &mut ran,
        );
        assert_eq!(s, codes::i2c::NACK_ON_ADDR);
        assert_eq!(ran, 2);
    }

    #[test]
    fn non_canonical_success_is_not_a_failure() {
        // Severity clear with a non-zero facility still counts as success.
        let mut ran = 0;
        let odd = StatusCode::from_raw(0x0105);
        let s = sequence(odd, StatusCode::SUCCESS, StatusCode::SUCCESS, &mut ran);
        assert_eq!(s, StatusCode::SUCCESS);
        assert_eq!(ran, 3);
    }

    #[cfg(feature = "debug-logging")]
    #[test]
    fn traced_propagation_still_returns_first_failure() {
        crate::set_log_level(crate::LogLevel::Trace);
        let mut ran = 0;
        let s = sequence(codes::imu::DATA_NOT_READY, StatusCode::SUCCESS, StatusCode::SUCCESS, &mut ran);
        assert_eq!(s, codes::imu::DATA_NOT_READY);
        assert_eq!(ran, 1);
    }

    mod local {
        status_catalog! {
            crate::Facility::new(100);
            FIRST = 0,
            /// documented entry
            SECOND = 7,
        }
    }

    #[test]
    fn catalog_macro_expands() {
        assert_eq!(local::FIRST, StatusCode::failure(Facility::new(100), 0));
        assert_eq!(local::SECOND.code(), 7);
        assert_eq!(local::ALL, &[(local::FIRST, "FIRST"), (local::SECOND, "SECOND")]);
    }
}
