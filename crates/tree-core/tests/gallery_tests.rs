// Host-side tests for the photo gallery and the preset auto-loader.

use tree_core::{
    KeyValueStore, MemoryStore, PhotoGallery, PresetLoader, StoreError, MAX_PHOTOS,
    PRESET_LOADED_KEY, PRESET_PHOTOS,
};

fn user_photos(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user-{}.jpg", i)).collect()
}

#[test]
fn gallery_respects_capacity() {
    let mut g = PhotoGallery::default();
    assert_eq!(g.add_many(user_photos(15)), MAX_PHOTOS);
    assert_eq!(g.len(), MAX_PHOTOS);
    assert_eq!(g.remaining(), 0);
    assert_eq!(g.add_many(user_photos(1)), 0);
}

#[test]
fn gallery_remove_and_clear() {
    let mut g = PhotoGallery::default();
    g.add_many(user_photos(3));
    assert_eq!(g.remove(1), Some("user-1.jpg".to_string()));
    assert_eq!(g.photos(), &["user-0.jpg".to_string(), "user-2.jpg".to_string()]);
    assert_eq!(g.remove(5), None);
    g.clear();
    assert!(g.is_empty());
}

#[test]
fn presets_load_once_into_an_empty_gallery() {
    let mut store = MemoryStore::default();
    let mut gallery = PhotoGallery::default();
    let mut loader = PresetLoader::default();

    assert_eq!(loader.load_if_needed(&mut store, &mut gallery).unwrap(), 4);
    assert_eq!(gallery.photos()[0], PRESET_PHOTOS[0].url);
    assert_eq!(store.get(PRESET_LOADED_KEY).unwrap().as_deref(), Some("true"));
    assert!(loader.is_loaded());

    // A second request, from wherever it comes, does nothing
    assert_eq!(loader.load_if_needed(&mut store, &mut gallery).unwrap(), 0);
    assert_eq!(gallery.len(), 4);
}

#[test]
fn persisted_flag_suppresses_loading_for_a_fresh_loader() {
    let mut store = MemoryStore::default();
    let mut first = PhotoGallery::default();
    PresetLoader::default()
        .load_if_needed(&mut store, &mut first)
        .unwrap();

    // Next session: empty gallery, but the store remembers
    let mut gallery = PhotoGallery::default();
    let mut loader = PresetLoader::default();
    assert_eq!(loader.load_if_needed(&mut store, &mut gallery).unwrap(), 0);
    assert!(gallery.is_empty());
    assert!(loader.is_loaded());
}

#[test]
fn existing_photos_block_autoload_without_setting_the_flag() {
    let mut store = MemoryStore::default();
    let mut gallery = PhotoGallery::default();
    gallery.add_many(user_photos(2));
    let mut loader = PresetLoader::default();

    assert_eq!(loader.load_if_needed(&mut store, &mut gallery).unwrap(), 0);
    assert_eq!(store.get(PRESET_LOADED_KEY).unwrap(), None);
    assert_eq!(gallery.len(), 2);
}

#[test]
fn user_photos_mark_presets_handled() {
    let mut store = MemoryStore::default();
    let mut gallery = PhotoGallery::default();
    let mut loader = PresetLoader::default();

    assert_eq!(
        loader
            .on_user_photos(&mut store, &mut gallery, user_photos(3))
            .unwrap(),
        3
    );
    assert!(loader.is_loaded());
    assert!(store.get(PRESET_LOADED_KEY).unwrap().is_some());
}

#[test]
fn clear_allows_presets_to_load_again() {
    let mut store = MemoryStore::default();
    let mut gallery = PhotoGallery::default();
    let mut loader = PresetLoader::default();
    loader.load_if_needed(&mut store, &mut gallery).unwrap();

    loader.clear(&mut store, &mut gallery).unwrap();
    assert!(gallery.is_empty());
    assert!(!loader.is_loaded());
    assert_eq!(store.get(PRESET_LOADED_KEY).unwrap(), None);

    assert_eq!(loader.load_if_needed(&mut store, &mut gallery).unwrap(), 4);
}

#[test]
fn add_all_presets_fills_free_slots() {
    let mut store = MemoryStore::default();
    let mut gallery = PhotoGallery::default();
    gallery.add_many(user_photos(10));
    let mut loader = PresetLoader::default();

    assert_eq!(loader.add_all_presets(&mut store, &mut gallery).unwrap(), 2);
    assert_eq!(gallery.len(), MAX_PHOTOS);
    assert!(loader.is_loaded());
}

#[test]
fn memory_store_rejects_empty_keys() {
    let mut store = MemoryStore::default();
    assert!(matches!(
        store.set("", "x"),
        Err(StoreError::InvalidKey(_))
    ));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
