use once_cell::sync::OnceCell;

mkenv::make_config! {
    /// The environment used by this crate.
    pub struct LibEnv {
        /// The largest gap with a standard, in percent, for which a time is "almost" there.
        pub almost_threshold_pct: {
            var_name: "SWIMSTATS_ALMOST_THRESHOLD_PCT",
            layers: [
                parsed_from_str<f64>(),
                or_default_val(|| 3.),
            ],
            description: "The largest gap with a qualifying standard, in percent, for which \
                a time is considered almost achieved (double)",
            default_val_fmt: "3.0",
        },

        /// Whether a single invalid meet rejects the whole import.
        pub strict_import: {
            var_name: "SWIMSTATS_STRICT_IMPORT",
            layers: [
                parsed_from_str<bool>(),
                or_default_val(|| false),
            ],
            description: "Whether a single invalid meet rejects the whole import, instead of \
                being skipped (boolean)",
            default_val_fmt: "false",
        },

        /// The number of decimals used to display percent differences.
        pub percent_decimals: {
            var_name: "SWIMSTATS_PERCENT_DECIMALS",
            layers: [
                parsed_from_str<usize>(),
                or_default_val(|| 2),
            ],
            description: "The number of decimals used to display percent differences",
            default_val_fmt: "2",
        }
    }
}

static ENV: OnceCell<LibEnv> = OnceCell::new();

/// Initializes the provided library environment as global.
///
/// If this function has already been called, the provided environment will be ignored.
pub fn init_env(env: LibEnv) {
    let _ = ENV.set(env);
}

/// Returns a static reference to the global library environment.
///
/// **Caution**: To use this function, the [`init_env()`] function must have been called at the start
/// of the program.
pub fn env() -> &'static LibEnv {
    ENV.get().unwrap()
}
