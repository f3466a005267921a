//! Rekordbox XML schema constants

/// Library file location relative to the home directory
pub const DEFAULT_RELATIVE_PATH: &str = "/Documents/rekordbox.xml";

/// Deepest folder nesting accepted below a playlist tree root
pub const MAX_FOLDER_DEPTH: usize = 64;

/// Element names
pub mod elements {
    pub const COLLECTION: &str = "COLLECTION";
    pub const PLAYLISTS: &str = "PLAYLISTS";
    pub const NODE: &str = "NODE";
    pub const TRACK: &str = "TRACK";
    pub const POSITION_MARK: &str = "POSITION_MARK";
}

/// Rekordbox track attribute names
pub mod attrs {
    pub const TRACK_ID: &str = "TrackID";
    pub const NAME: &str = "Name";
    pub const ARTIST: &str = "Artist";
    pub const ALBUM: &str = "Album";
    pub const GENRE: &str = "Genre";
    pub const KIND: &str = "Kind";
    pub const SIZE: &str = "Size";
    pub const TOTAL_TIME: &str = "TotalTime";
    pub const YEAR: &str = "Year";
    pub const AVERAGE_BPM: &str = "AverageBpm";
    pub const DATE_ADDED: &str = "DateAdded";
    pub const BIT_RATE: &str = "BitRate";
    pub const SAMPLE_RATE: &str = "SampleRate";
    pub const COMMENTS: &str = "Comments";
    pub const PLAY_COUNT: &str = "PlayCount";
    pub const RATING: &str = "Rating";
    pub const TONALITY: &str = "Tonality";
    pub const LABEL: &str = "Label";
    pub const LOCATION: &str = "Location";
}

/// POSITION_MARK attribute names
pub mod mark_attrs {
    pub const NAME: &str = "Name";
    pub const TYPE: &str = "Type";
    pub const START: &str = "Start";
    pub const NUM: &str = "Num";
    pub const RED: &str = "Red";
    pub const GREEN: &str = "Green";
    pub const BLUE: &str = "Blue";
}

/// Playlist tree NODE attribute names
pub mod node_attrs {
    pub const NAME: &str = "Name";
    pub const TYPE: &str = "Type";
    pub const COUNT: &str = "Count";
    pub const KEY_TYPE: &str = "KeyType";
    pub const ENTRIES: &str = "Entries";
    /// Attribute of a playlist's TRACK child
    pub const KEY: &str = "Key";
}
