use crate::codec::ByteCodec;
use crate::quaternion::Quat;
use crate::wasm::{codec_error_to_js, matrix_js::Mat4Js, vector_js::Vec3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct QuatJs {
    pub(crate) inner: Quat<f64>,
}

#[wasm_bindgen]
impl QuatJs {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> QuatJs {
        QuatJs {
            inner: Quat::new(x, y, z, w),
        }
    }

    #[wasm_bindgen(js_name = identity)]
    pub fn identity() -> QuatJs {
        QuatJs {
            inner: Quat::IDENTITY,
        }
    }

    /// `angle` in radians.
    #[wasm_bindgen(js_name = fromAxisAngle)]
    pub fn from_axis_angle(axis: &Vec3Js, angle: f64) -> QuatJs {
        QuatJs {
            inner: Quat::from_axis_angle(axis.inner, angle),
        }
    }

    #[wasm_bindgen(js_name = fromMatrix)]
    pub fn from_matrix(m: &Mat4Js) -> QuatJs {
        QuatJs {
            inner: Quat::from_matrix(&m.inner),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    #[wasm_bindgen(getter)]
    pub fn w(&self) -> f64 {
        self.inner.w
    }

    pub fn mul(&self, other: &QuatJs) -> QuatJs {
        QuatJs {
            inner: self.inner * other.inner,
        }
    }

    pub fn normalize(&self) -> QuatJs {
        QuatJs {
            inner: self.inner.normalize(),
        }
    }

    pub fn conjugate(&self) -> QuatJs {
        QuatJs {
            inner: self.inner.conjugate(),
        }
    }

    pub fn slerp(&self, dest: &QuatJs, amt: f64, shortest: bool) -> QuatJs {
        QuatJs {
            inner: self.inner.slerp(dest.inner, amt, shortest),
        }
    }

    pub fn forward(&self) -> Vec3Js {
        Vec3Js::from(self.inner.forward())
    }

    pub fn up(&self) -> Vec3Js {
        Vec3Js::from(self.inner.up())
    }

    pub fn right(&self) -> Vec3Js {
        Vec3Js::from(self.inner.right())
    }

    #[wasm_bindgen(js_name = rotationMatrix)]
    pub fn rotation_matrix(&self) -> Mat4Js {
        Mat4Js::from(self.inner.rotation_matrix())
    }

    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<QuatJs, JsValue> {
        Quat::try_read_bytes(bytes, offset)
            .map(|inner| QuatJs { inner })
            .map_err(codec_error_to_js)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}
