use setlist_core::types::Playlist;

/// Shape playlist search results for listing
///
/// Search results carry no reference lists; callers fetch a single playlist to
/// see its tracks.
pub fn project_search_results(playlists: Vec<Playlist>) -> Vec<Playlist> {
    playlists
        .into_iter()
        .map(|mut playlist| {
            playlist.track_ids.clear();
            playlist
        })
        .collect()
}
