use album_core::{Album, AlbumData};

#[test]
fn album_initial_state_is_unset() {
    let album = Album::new();

    assert_eq!(album.artist, None, "artist should initially be unset");
    assert_eq!(album.id, None, "id should initially be unset");
    assert_eq!(album.title, None, "title should initially be unset");
}

#[test]
fn exchange_array_sets_properties() {
    let data = AlbumData {
        id: Some(123),
        artist: Some("some artist".to_string()),
        title: Some("some title".to_string()),
    };
    let mut album = Album::new();

    album.exchange_array(data.clone());

    assert_eq!(album.artist, data.artist);
    assert_eq!(album.id, data.id);
    assert_eq!(album.title, data.title);
}

#[test]
fn exchange_array_resets_properties_when_keys_are_absent() {
    let mut album = Album::new();
    album.exchange_array(AlbumData {
        id: Some(123),
        artist: Some("some artist".to_string()),
        title: Some("some title".to_string()),
    });

    album.exchange_array(AlbumData::default());

    assert_eq!(album, Album::new());
}

#[test]
fn get_array_copy_returns_assigned_data() {
    let data = AlbumData {
        id: Some(5),
        artist: Some("Adele".to_string()),
        title: None,
    };
    let mut album = Album::new();
    album.exchange_array(data.clone());

    assert_eq!(album.get_array_copy(), data);
}

#[test]
fn album_data_deserializes_missing_keys_as_unset() {
    let data: AlbumData = serde_json::from_value(serde_json::json!({
        "artist": "The Military Wives"
    }))
    .unwrap();

    let mut album = Album::new();
    album.exchange_array(AlbumData {
        id: Some(1),
        artist: Some("previous".to_string()),
        title: Some("previous".to_string()),
    });
    album.exchange_array(data);

    assert_eq!(album.id, None);
    assert_eq!(album.artist.as_deref(), Some("The Military Wives"));
    assert_eq!(album.title, None);
}

#[test]
fn album_serialization_uses_expected_wire_fields() {
    let album = Album::from(AlbumData {
        id: Some(123),
        artist: Some("The Military Wives".to_string()),
        title: Some("In My Dreams".to_string()),
    });

    let json = serde_json::to_value(&album).unwrap();
    assert_eq!(json["id"], 123);
    assert_eq!(json["artist"], "The Military Wives");
    assert_eq!(json["title"], "In My Dreams");

    let decoded: Album = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, album);
}
