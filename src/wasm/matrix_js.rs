use crate::codec::ByteCodec;
use crate::matrix::Mat4;
use crate::wasm::{codec_error_to_js, vector_js::Vec3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Mat4Js {
    pub(crate) inner: Mat4<f64>,
}

#[wasm_bindgen]
impl Mat4Js {
    /// Builds a matrix from 16 values in row-major order.
    #[wasm_bindgen(constructor)]
    pub fn new(values: &[f64]) -> Result<Mat4Js, JsValue> {
        if values.len() != 16 {
            return Err(JsValue::from_str(&format!(
                "expected 16 matrix entries, got {}",
                values.len()
            )));
        }
        let mut rows = [[0.0; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(values.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Ok(Mat4Js {
            inner: Mat4::from_rows(rows),
        })
    }

    #[wasm_bindgen(js_name = identity)]
    pub fn identity() -> Mat4Js {
        Mat4Js::from(Mat4::identity())
    }

    #[wasm_bindgen(js_name = translation)]
    pub fn translation(x: f64, y: f64, z: f64) -> Mat4Js {
        Mat4Js::from(Mat4::translation(x, y, z))
    }

    #[wasm_bindgen(js_name = scale)]
    pub fn scale(x: f64, y: f64, z: f64) -> Mat4Js {
        Mat4Js::from(Mat4::scale(x, y, z))
    }

    /// Angles in degrees.
    #[wasm_bindgen(js_name = rotationEuler)]
    pub fn rotation_euler(x: f64, y: f64, z: f64) -> Mat4Js {
        Mat4Js::from(Mat4::rotation_euler(x, y, z))
    }

    #[wasm_bindgen(js_name = perspective)]
    pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Mat4Js {
        Mat4Js::from(Mat4::perspective(fov, aspect, near, far))
    }

    #[wasm_bindgen(js_name = orthographic)]
    pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Mat4Js {
        Mat4Js::from(Mat4::orthographic(left, right, bottom, top, near, far))
    }

    #[wasm_bindgen(js_name = lookAt)]
    pub fn look_at(eye: &Vec3Js, target: &Vec3Js, up: &Vec3Js) -> Mat4Js {
        Mat4Js::from(Mat4::look_at(eye.inner, target.inner, up.inner))
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner.get(row, col)
    }

    pub fn mul(&self, other: &Mat4Js) -> Mat4Js {
        Mat4Js::from(self.inner * other.inner)
    }

    pub fn determinant(&self) -> f64 {
        self.inner.determinant()
    }

    #[wasm_bindgen(js_name = transformPoint)]
    pub fn transform_point(&self, p: &Vec3Js) -> Vec3Js {
        Vec3Js::from(self.inner.transform(p.inner))
    }

    #[wasm_bindgen(js_name = frustumRayDir)]
    pub fn frustum_ray_dir(&self, x: f64, y: f64) -> Vec3Js {
        Vec3Js::from(self.inner.frustum_ray_dir(x, y))
    }

    /// Row-major entries.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_rows().as_flattened().to_vec()
    }

    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<Mat4Js, JsValue> {
        Mat4::try_read_bytes(bytes, offset)
            .map(Mat4Js::from)
            .map_err(codec_error_to_js)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions
impl From<Mat4<f64>> for Mat4Js {
    fn from(m: Mat4<f64>) -> Self {
        Mat4Js { inner: m }
    }
}
