use super::*;

#[test]
fn sigma_0_is_identity() {
    let mut c = Canvas::new(3, 3);
    c.set_pixel(1, 1, [255, 255, 255, 255]);
    assert_eq!(gaussian_blur(&c, 0.0).unwrap(), c);
}

#[test]
fn kernel_sums_to_one_in_q16() {
    for (r, s) in [(1u32, 0.5f32), (3, 1.0), (6, 2.0)] {
        let k = gaussian_kernel_q16(r, s).unwrap();
        assert_eq!(k.len(), (2 * r + 1) as usize);
        assert_eq!(k.iter().map(|&w| u64::from(w)).sum::<u64>(), 65536);
    }
}

#[test]
fn invalid_sigma_is_rejected() {
    assert!(gaussian_kernel_q16(2, 0.0).is_err());
    assert!(gaussian_kernel_q16(2, f32::NAN).is_err());
}

#[test]
fn blur_spreads_a_single_pixel() {
    let mut c = Canvas::new(9, 9);
    c.set_pixel(4, 4, [0, 255, 255, 255]);
    let out = gaussian_blur(&c, 1.0).unwrap();
    assert!(out.ink_pixels() > 1);
    // Color is preserved where coverage spreads.
    let px = out.pixel(4, 5);
    assert!(px[3] > 0);
    assert_eq!(px[0], 0);
    assert!(px[1] >= 250);
}

#[test]
fn interior_of_constant_region_is_stable() {
    let c = Canvas::filled(11, 11, [10, 20, 30, 255]);
    let out = gaussian_blur(&c, 1.0).unwrap();
    assert_eq!(out.pixel(5, 5), [10, 20, 30, 255]);
}
