//! Named three-component swizzles.
//!
//! `v.zyx()`, `v.xxw()`, ... select, reorder or duplicate components into a new [`Vec3`].
//! Every combination is generated: 27 from a `Vec3` source and 64 from a `Vec4` source.

use super::{Vec3, Vec4};
use crate::float_types::Real;

macro_rules! swizzles3 {
    ($src:ident; $($name:ident => $a:ident $b:ident $c:ident),* $(,)?) => {
        impl<T: Real> $src<T> {
            $(
                #[inline]
                pub const fn $name(self) -> Vec3<T> {
                    Vec3::new(self.$a, self.$b, self.$c)
                }
            )*
        }
    };
}

swizzles3! {
    Vec3;
    xxx => x x x, xxy => x x y, xxz => x x z, xyx => x y x,
    xyy => x y y, xyz => x y z, xzx => x z x, xzy => x z y,
    xzz => x z z, yxx => y x x, yxy => y x y, yxz => y x z,
    yyx => y y x, yyy => y y y, yyz => y y z, yzx => y z x,
    yzy => y z y, yzz => y z z, zxx => z x x, zxy => z x y,
    zxz => z x z, zyx => z y x, zyy => z y y, zyz => z y z,
    zzx => z z x, zzy => z z y, zzz => z z z,
}

swizzles3! {
    Vec4;
    xxx => x x x, xxy => x x y, xxz => x x z, xxw => x x w,
    xyx => x y x, xyy => x y y, xyz => x y z, xyw => x y w,
    xzx => x z x, xzy => x z y, xzz => x z z, xzw => x z w,
    xwx => x w x, xwy => x w y, xwz => x w z, xww => x w w,
    yxx => y x x, yxy => y x y, yxz => y x z, yxw => y x w,
    yyx => y y x, yyy => y y y, yyz => y y z, yyw => y y w,
    yzx => y z x, yzy => y z y, yzz => y z z, yzw => y z w,
    ywx => y w x, ywy => y w y, ywz => y w z, yww => y w w,
    zxx => z x x, zxy => z x y, zxz => z x z, zxw => z x w,
    zyx => z y x, zyy => z y y, zyz => z y z, zyw => z y w,
    zzx => z z x, zzy => z z y, zzz => z z z, zzw => z z w,
    zwx => z w x, zwy => z w y, zwz => z w z, zww => z w w,
    wxx => w x x, wxy => w x y, wxz => w x z, wxw => w x w,
    wyx => w y x, wyy => w y y, wyz => w y z, wyw => w y w,
    wzx => w z x, wzy => w z y, wzz => w z z, wzw => w z w,
    wwx => w w x, wwy => w w y, wwz => w w z, www => w w w,
}
