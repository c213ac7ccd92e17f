//! TMDB crew job to Matroska tag name mapping.

/// Fixed job → tag table. Matching is exact and case-sensitive.
///
/// `CHOREGRAPHER` is misspelled in the Matroska tag list and must stay that
/// way for compatibility with existing tag consumers.
pub const CREW_TAGS: &[(&str, &str)] = &[
    ("Art Direction", "ART_DIRECTOR"),
    ("Costume Design", "COSTUME_DESIGNER"),
    ("Director of Photography", "DIRECTOR_OF_PHOTOGRAPHY"),
    ("Director", "DIRECTOR"),
    ("Assistant Director", "ASSISTANT_DIRECTOR"),
    ("Editor", "EDITED_BY"),
    ("Novel", "WRITTEN_BY"),
    ("Original Music Composer", "COMPOSER"),
    ("Conductor", "CONDUCTOR"),
    ("Producer", "PRODUCER"),
    ("Screenplay", "WRITTEN_BY"),
    ("Sound", "COMPOSER"),
    ("Theme Song Performance", "LEAD_PERFORMER"),
    ("Writer", "WRITTEN_BY"),
    ("Choreographer", "CHOREGRAPHER"),
];

/// Tag name for a crew job, if the job is mapped.
pub fn tag_for_job(job: &str) -> Option<&'static str> {
    CREW_TAGS
        .iter()
        .find(|(known, _)| *known == job)
        .map(|(_, tag)| *tag)
}
