//! SHA-512 round functions.

use super::K512;

#[inline(always)]
pub fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands 16 block words into the 80-word message schedule.
pub fn message_schedule(block: [u64; 16]) -> [u64; 80] {
    let mut w = [0u64; 80];
    w[..16].copy_from_slice(&block);

    for t in 16..80 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u64; 8], block: [u64; 16]) {
    let w = message_schedule(block);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for t in 0..80 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K512[t])
            .wrapping_add(w[t]);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Unrolled variant keeping only a 16-word window of the schedule.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($i:expr) => {{
            if $i >= 16 {
                // t-16, t-15, t-7 and t-2, modulo the window size.
                let w16 = w[$i & 15];
                let w15 = w[($i + 1) & 15];
                let w7 = w[($i + 9) & 15];
                let w2 = w[($i + 14) & 15];

                w[$i & 15] = small_sigma1(w2)
                    .wrapping_add(w7)
                    .wrapping_add(small_sigma0(w15))
                    .wrapping_add(w16);
            }

            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K512[$i])
                .wrapping_add(w[$i & 15]);

            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }};
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);
    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
    R!(24);
    R!(25);
    R!(26);
    R!(27);
    R!(28);
    R!(29);
    R!(30);
    R!(31);

    R!(32);
    R!(33);
    R!(34);
    R!(35);
    R!(36);
    R!(37);
    R!(38);
    R!(39);
    R!(40);
    R!(41);
    R!(42);
    R!(43);
    R!(44);
    R!(45);
    R!(46);
    R!(47);

    R!(48);
    R!(49);
    R!(50);
    R!(51);
    R!(52);
    R!(53);
    R!(54);
    R!(55);
    R!(56);
    R!(57);
    R!(58);
    R!(59);
    R!(60);
    R!(61);
    R!(62);
    R!(63);

    R!(64);
    R!(65);
    R!(66);
    R!(67);
    R!(68);
    R!(69);
    R!(70);
    R!(71);
    R!(72);
    R!(73);
    R!(74);
    R!(75);
    R!(76);
    R!(77);
    R!(78);
    R!(79);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
