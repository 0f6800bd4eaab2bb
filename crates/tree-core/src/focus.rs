use crate::constants::NOMINAL_GALLERY_SIZE;
use rand::Rng;

/// Pick which photo to bring forward on a Galaxy -> Focus transition.
///
/// With no photos the nominal gallery size is assumed, so the result is
/// always a valid slot index for a full gallery.
pub fn select_focus<R: Rng + ?Sized>(photo_count: usize, rng: &mut R) -> usize {
    let upper = if photo_count > 0 {
        photo_count.min(NOMINAL_GALLERY_SIZE)
    } else {
        NOMINAL_GALLERY_SIZE
    };
    rng.gen_range(0..upper)
}
