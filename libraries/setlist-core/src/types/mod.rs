mod ids;
mod playlist;
mod track;

pub use ids::{DocumentId, ParseDocumentIdError, UserId, DOCUMENT_ID_HEX_LEN, DOCUMENT_ID_LEN};
pub use playlist::{Playlist, PlaylistFields, PlaylistFilter, PlaylistWithTracks};
pub use track::{MusicTrack, TrackFields, TrackFilter};
