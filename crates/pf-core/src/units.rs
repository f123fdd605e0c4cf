// pf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea,
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    Pressure as UomPressure, Ratio as UomRatio, Time as UomTime, Velocity as UomVelocity,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
/// Kinematic viscosity (m²/s shares the diffusion-coefficient dimension)
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn microinch(v: f64) -> Length {
    use uom::si::length::microinch;
    Length::new::<microinch>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// US gallons per minute, the customary flow-rate input for pipe sizing.
#[inline]
pub fn gpm(v: f64) -> VolumeRate {
    use uom::si::time::minute;
    use uom::si::volume::gallon;
    Volume::new::<gallon>(v) / Time::new::<minute>(1.0)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Kinematic viscosity of water at 60 °F (1.08e-5 ft²/s in SI).
    pub const NU_WATER_60F_M2PS: f64 = 1.003e-6;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }

    #[inline]
    pub fn nu_water_60f() -> KinVisc {
        m2ps(NU_WATER_60F_M2PS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _l = m(2.0);
        let _dt = s(0.1);
        let _r = unitless(0.5);
        let _nu = constants::nu_water_60f();
        let _g0 = constants::g0();
    }

    #[test]
    fn imperial_conversions() {
        // 1 inch = 0.0254 m
        assert!((inch(1.0).value - 0.0254).abs() < 1e-12);
        // 1 micro-inch = 2.54e-8 m
        assert!((microinch(1.0).value - 2.54e-8).abs() < 1e-20);
        // 1 gpm = 6.309e-5 m³/s
        assert!((gpm(1.0).value - 6.30902e-5).abs() < 1e-9);
    }
}
