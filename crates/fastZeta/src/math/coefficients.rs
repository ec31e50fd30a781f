//! Correction-series polynomials of the Riemann-Siegel formula.
//!
//! ## Purpose
//!
//! This module evaluates the five fixed polynomials C0(z)..C4(z) that supply
//! the remainder terms of the Riemann-Siegel expansion, with
//! `z = 2p − 1` and `p` the fractional part of `sqrt(t / 2π)`.
//!
//! ## Design notes
//!
//! * **Constant tables**: coefficients are the published values from Pugh's
//!   thesis, stored to full double precision and never re-derived.
//! * **Shared powers**: one call builds z², z⁴, z⁶ and the octave powers
//!   z⁸, z¹⁶, …, z⁴⁸ once; every polynomial is then a sum of products against
//!   them. Odd polynomials reuse the even scheme and multiply by `z` once.
//!
//! ## Key concepts
//!
//! * **Parity**: C0, C2, C4 contain only even powers of `z`; C1, C3 only odd.
//! * **Lanes**: coefficient `j` of an even series multiplies
//!   `z^(2j) = z^(2(j mod 4)) · z^(8(j div 4))`, so terms are grouped into four
//!   lanes that are combined with z⁰, z², z⁴, z⁶ at the end.
//!
//! ## Invariants
//!
//! * `z ∈ [−1, 1]`. Outside that interval the polynomials are still evaluated
//!   but carry no meaning.

/// Number of correction polynomials (truncation order 4).
pub const CORRECTION_TERMS: usize = 5;

/// Coefficients of C0, lowest power first (z⁰, z², z⁴, …).
pub const C0_COEFFICIENTS: [f64; 22] = [
    0.38268343236508977173, // z^0
    0.43724046807752044936, // z^2
    0.13237657548034352332, // z^4
    -0.01360502604767418865, // z^6
    -0.01356762197010358089, // z^8
    -0.00162372532314446528, // z^10
    0.00029705353733379691, // z^12
    0.00007943300879521470, // z^14
    0.00000046556124614505, // z^16
    -0.00000143272516309551, // z^18
    -0.00000010354847112313, // z^20
    0.00000001235792708386, // z^22
    0.00000000178810838580, // z^24
    -0.00000000003391414390, // z^26
    -0.00000000001632663390, // z^28
    -0.00000000000037851093, // z^30
    0.00000000000009327423, // z^32
    0.00000000000000522184, // z^34
    -0.00000000000000033507, // z^36
    -0.00000000000000003412, // z^38
    0.00000000000000000058, // z^40
    0.00000000000000000015, // z^42
];

/// Coefficients of C1, lowest power first (z¹, z³, z⁵, …).
pub const C1_COEFFICIENTS: [f64; 23] = [
    -0.02682510262837534703, // z^1
    0.01378477342635185305, // z^3
    0.03849125048223508223, // z^5
    0.00987106629906207647, // z^7
    -0.00331075976085840433, // z^9
    -0.00146478085779541508, // z^11
    -0.00001320794062487696, // z^13
    0.00005922748701847141, // z^15
    0.00000598024258537345, // z^17
    -0.00000096413224561698, // z^19
    -0.00000018334733722714, // z^21
    0.00000000446708756272, // z^23
    0.00000000270963508218, // z^25
    0.00000000007785288654, // z^27
    -0.00000000002343762601, // z^29
    -0.00000000000158301728, // z^31
    0.00000000000012119942, // z^33
    0.00000000000001458378, // z^35
    -0.00000000000000028786, // z^37
    -0.00000000000000008663, // z^39
    -0.00000000000000000084, // z^41
    0.00000000000000000036, // z^43
    0.00000000000000000001, // z^45
];

/// Coefficients of C2, lowest power first (z⁰, z², z⁴, …).
pub const C2_COEFFICIENTS: [f64; 24] = [
    0.00518854283029316849, // z^0
    0.00030946583880634746, // z^2
    -0.01133594107822937338, // z^4
    0.00223304574195814477, // z^6
    0.00519663740886233021, // z^8
    0.00034399144076208337, // z^10
    -0.00059106484274705828, // z^12
    -0.00010229972547935857, // z^14
    0.00002088839221699276, // z^16
    0.00000592766549309654, // z^18
    -0.00000016423838362436, // z^20
    -0.00000015161199700941, // z^22
    -0.00000000590780369821, // z^24
    0.00000000209115148595, // z^26
    0.00000000017815649583, // z^28
    -0.00000000001616407246, // z^30
    -0.00000000000238069625, // z^32
    0.00000000000005398265, // z^34
    0.00000000000001975014, // z^36
    0.00000000000000023333, // z^38
    -0.00000000000000011188, // z^40
    -0.00000000000000000416, // z^42
    0.00000000000000000044, // z^44
    0.00000000000000000003, // z^46
];

/// Coefficients of C3, lowest power first (z¹, z³, z⁵, …).
pub const C3_COEFFICIENTS: [f64; 24] = [
    -0.00133971609071945690, // z^1
    0.00374421513637939370, // z^3
    -0.00133031789193214681, // z^5
    -0.00226546607654717871, // z^7
    0.00095484999985067304, // z^9
    0.00060100384589636039, // z^11
    -0.00010128858286776622, // z^13
    -0.00006865733449299826, // z^15
    0.00000059853667915386, // z^17
    0.00000333165985123995, // z^19
    0.00000021919289102435, // z^21
    -0.00000007890884245681, // z^23
    -0.00000000941468508130, // z^25
    0.00000000095701162109, // z^27
    0.00000000018763137453, // z^29
    -0.00000000000443783768, // z^31
    -0.00000000000224267385, // z^33
    -0.00000000000003627687, // z^35
    0.00000000000001763981, // z^37
    0.00000000000000079608, // z^39
    -0.00000000000000009420, // z^41
    -0.00000000000000000713, // z^43
    0.00000000000000000033, // z^45
    0.00000000000000000004, // z^47
];

/// Coefficients of C4, lowest power first (z⁰, z², z⁴, …).
pub const C4_COEFFICIENTS: [f64; 25] = [
    0.00046483389361763382, // z^0
    -0.00100566073653404708, // z^2
    0.00024044856573725793, // z^4
    0.00102830861497023219, // z^6
    -0.00076578610717556442, // z^8
    -0.00020365286803084818, // z^10
    0.00023212290491068728, // z^12
    0.00003260214424386520, // z^14
    -0.00002557906251794953, // z^16
    -0.00000410746443891574, // z^18
    0.00000117811136403713, // z^20
    0.00000024456561422485, // z^22
    -0.00000002391582476734, // z^24
    -0.00000000750521420704, // z^26
    0.00000000013312279416, // z^28
    0.00000000013440626754, // z^30
    0.00000000000351377004, // z^32
    -0.00000000000151915445, // z^34
    -0.00000000000008915418, // z^36
    0.00000000000001119589, // z^38
    0.00000000000000105160, // z^40
    -0.00000000000000005179, // z^42
    -0.00000000000000000807, // z^44
    0.00000000000000000011, // z^46
    0.00000000000000000004, // z^48
];

/// All coefficient tables, indexed by polynomial order.
pub const COEFFICIENTS: [&[f64]; CORRECTION_TERMS] = [
    &C0_COEFFICIENTS,
    &C1_COEFFICIENTS,
    &C2_COEFFICIENTS,
    &C3_COEFFICIENTS,
    &C4_COEFFICIENTS,
];

// ============================================================================
// Shared Powers
// ============================================================================

/// Powers of `z` shared by all five polynomials.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionPowers {
    z: f64,
    z2: f64,
    z4: f64,
    z6: f64,
    /// z⁰, z⁸, z¹⁶, z²⁴, z³², z⁴⁰, z⁴⁸.
    octaves: [f64; 7],
}

impl CorrectionPowers {
    /// Build the shared powers by repeated squaring.
    #[inline(always)]
    pub fn new(z: f64) -> Self {
        let z2 = z * z;
        let z4 = z2 * z2;
        let z6 = z4 * z2;
        let z8 = z4 * z4;
        let z16 = z8 * z8;
        let z24 = z16 * z8;
        let z32 = z16 * z16;
        let z40 = z32 * z8;
        let z48 = z40 * z8;

        Self {
            z,
            z2,
            z4,
            z6,
            octaves: [1.0, z8, z16, z24, z32, z40, z48],
        }
    }

    /// Sum `Σ c_j · z^(2j)` over an even coefficient table.
    #[inline(always)]
    fn even_series(&self, coefficients: &[f64]) -> f64 {
        let mut lanes = [0.0_f64; 4];
        for (j, &c) in coefficients.iter().enumerate() {
            lanes[j & 3] += c * self.octaves[j >> 2];
        }
        lanes[0] + lanes[1] * self.z2 + lanes[2] * self.z4 + lanes[3] * self.z6
    }

    /// Sum `Σ c_j · z^(2j+1)` over an odd coefficient table.
    #[inline(always)]
    fn odd_series(&self, coefficients: &[f64]) -> f64 {
        self.z * self.even_series(coefficients)
    }
}

// ============================================================================
// Polynomial Evaluation
// ============================================================================

/// Evaluate C0(z)..C4(z) together, sharing one set of powers.
#[inline(always)]
pub fn correction_terms(z: f64) -> [f64; CORRECTION_TERMS] {
    let powers = CorrectionPowers::new(z);
    [
        powers.even_series(&C0_COEFFICIENTS),
        powers.odd_series(&C1_COEFFICIENTS),
        powers.even_series(&C2_COEFFICIENTS),
        powers.odd_series(&C3_COEFFICIENTS),
        powers.even_series(&C4_COEFFICIENTS),
    ]
}

/// Evaluate a single polynomial `C_order(z)`.
///
/// Returns `None` when `order` is not in `0..=4`.
pub fn correction(order: usize, z: f64) -> Option<f64> {
    let coefficients = COEFFICIENTS.get(order)?;
    let powers = CorrectionPowers::new(z);
    Some(if order % 2 == 0 {
        powers.even_series(coefficients)
    } else {
        powers.odd_series(coefficients)
    })
}

/// Term-by-term evaluation with `powi`, used to check the shared-power path.
///
/// Returns `None` when `order` is not in `0..=4`.
pub fn correction_direct(order: usize, z: f64) -> Option<f64> {
    let coefficients = COEFFICIENTS.get(order)?;
    let parity = (order % 2) as i32;
    Some(
        coefficients
            .iter()
            .enumerate()
            .map(|(j, &c)| c * z.powi(2 * j as i32 + parity))
            .sum(),
    )
}
