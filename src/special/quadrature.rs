//! Gauss-Legendre quadrature constants
//!
//! Fixed 18-point rule on the unit interval, used to integrate the gamma
//! integrand when the shape parameter is large enough that both the power
//! series and the continued fraction converge slowly.

/// Abscissas of the 18-point Gauss-Legendre rule on (0, 1)
pub(crate) const ABSCISSAS: [f64; 18] = [
    0.002_169_537_515_914_199_4,
    0.011_413_521_097_787_704,
    0.027_972_308_950_302_116,
    0.051_727_015_600_492_421,
    0.082_502_225_484_340_941,
    0.120_070_199_109_602_93,
    0.164_152_833_007_524_70,
    0.214_423_769_867_793_55,
    0.270_510_828_406_443_36,
    0.331_998_763_414_478_87,
    0.398_432_341_864_019_43,
    0.469_319_714_073_754_83,
    0.544_136_055_566_579_73,
    0.622_327_452_880_310_77,
    0.703_315_004_655_971_74,
    0.786_499_107_683_134_47,
    0.871_263_896_190_615_17,
    0.956_981_801_526_291_42,
];

/// Weights paired with [`ABSCISSAS`]
pub(crate) const WEIGHTS: [f64; 18] = [
    0.005_565_719_664_244_557_1,
    0.012_915_947_284_065_419,
    0.020_181_515_297_735_382,
    0.027_298_621_498_568_734,
    0.034_213_810_770_299_537,
    0.040_875_750_923_643_261,
    0.047_235_083_490_265_582,
    0.053_244_713_977_759_692,
    0.058_860_144_245_324_798,
    0.064_039_797_355_015_485,
    0.068_745_323_835_736_408,
    0.072_941_885_005_653_087,
    0.076_598_410_645_870_640,
    0.079_687_828_912_071_670,
    0.082_187_266_704_339_706,
    0.084_078_218_979_661_945,
    0.085_346_685_739_338_721,
    0.085_983_275_670_394_821,
];
