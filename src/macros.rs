/// Logs how long `$block` took when the `stats` feature is enabled.
macro_rules! timed {
    ($name:literal, $block:block) => {{
        #[cfg(feature = "stats")]
        {
            let start = std::time::Instant::now();
            let result = $block;
            bevy::log::debug!("{} in {:?}", $name, start.elapsed());
            result
        }

        #[cfg(not(feature = "stats"))]
        {
            $block
        }
    }};
}
