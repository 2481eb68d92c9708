use windowed::RtlOffsetMode;

/// Converts a canonical offset back into the platform's reported
/// convention; the inverse of [`windowed::canonical_offset`].
///
/// Hosts use this when writing a programmatic scroll back to a
/// right-to-left container: the engine works in canonical
/// non-negative-from-start offsets, but the container expects whatever its
/// platform reports.
pub fn physical_inline_offset(
    canonical: u64,
    mode: RtlOffsetMode,
    content_extent: u64,
    viewport_extent: u32,
) -> i64 {
    match mode {
        RtlOffsetMode::Negative => -(canonical as i64),
        RtlOffsetMode::PositiveAscending => canonical as i64,
        RtlOffsetMode::PositiveDescending => content_extent
            .saturating_sub(viewport_extent as u64)
            .saturating_sub(canonical) as i64,
    }
}
