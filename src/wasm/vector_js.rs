use crate::codec::ByteCodec;
use crate::vector::Vec3;
use crate::wasm::{codec_error_to_js, quaternion_js::QuatJs};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Vec3Js {
    pub(crate) inner: Vec3<f64>,
}

#[wasm_bindgen]
impl Vec3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Vec3Js {
        Vec3Js {
            inner: Vec3::new(x, y, z),
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

    pub fn add(&self, other: &Vec3Js) -> Vec3Js {
        Vec3Js::from(self.inner + other.inner)
    }

    pub fn sub(&self, other: &Vec3Js) -> Vec3Js {
        Vec3Js::from(self.inner - other.inner)
    }

    pub fn scale(&self, s: f64) -> Vec3Js {
        Vec3Js::from(self.inner * s)
    }

    pub fn dot(&self, other: &Vec3Js) -> f64 {
        self.inner.dot(other.inner)
    }

    pub fn cross(&self, other: &Vec3Js) -> Vec3Js {
        Vec3Js::from(self.inner.cross(other.inner))
    }

    pub fn length(&self) -> f64 {
        self.inner.length()
    }

    pub fn normalize(&self) -> Vec3Js {
        Vec3Js::from(self.inner.normalize())
    }

    pub fn lerp(&self, dest: &Vec3Js, amt: f64) -> Vec3Js {
        Vec3Js::from(self.inner.lerp(dest.inner, amt))
    }

    #[wasm_bindgen(js_name = rotateAxisAngle)]
    pub fn rotate_axis_angle(&self, axis: &Vec3Js, angle: f64) -> Vec3Js {
        Vec3Js::from(self.inner.rotate_axis_angle(axis.inner, angle))
    }

    #[wasm_bindgen(js_name = rotate)]
    pub fn rotate(&self, rotation: &QuatJs) -> Vec3Js {
        Vec3Js::from(self.inner.rotate(rotation.inner))
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<Vec3Js, JsValue> {
        Vec3::try_read_bytes(bytes, offset)
            .map(Vec3Js::from)
            .map_err(codec_error_to_js)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions
impl From<Vec3<f64>> for Vec3Js {
    fn from(v: Vec3<f64>) -> Self {
        Vec3Js { inner: v }
    }
}

impl From<&Vec3Js> for Vec3<f64> {
    fn from(v: &Vec3Js) -> Self {
        v.inner
    }
}
