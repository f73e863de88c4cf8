//! Conversions between ndarray matrices and tch tensors

use ndarray::Array2;
use tch::{Device, Kind, Tensor};

use crate::error::{Error, Result};

/// Copy a (rows, cols) matrix into a float32 tensor on `device`
pub fn array_to_tensor(data: &Array2<f64>, device: Device) -> Tensor {
    let (rows, cols) = data.dim();
    let values: Vec<f32> = data.iter().map(|&v| v as f32).collect();
    Tensor::from_slice(&values)
        .view([rows as i64, cols as i64])
        .to_device(device)
}

/// Copy a 2-D tensor back into an f64 matrix
pub fn tensor_to_array(tensor: &Tensor) -> Result<Array2<f64>> {
    let size = tensor.size();
    if size.len() != 2 {
        return Err(Error::ShapeMismatch {
            expected: 2,
            actual: size.len(),
        });
    }

    let flat = tensor
        .to_device(Device::Cpu)
        .to_kind(Kind::Double)
        .contiguous()
        .view([-1]);
    let values = Vec::<f64>::try_from(&flat)?;

    Ok(Array2::from_shape_vec((size[0] as usize, size[1] as usize), values)?)
}

/// Copy a (batch, 1) or (batch,) tensor of scores into a vector
pub fn tensor_to_vec(tensor: &Tensor) -> Result<Vec<f64>> {
    let flat = tensor
        .to_device(Device::Cpu)
        .to_kind(Kind::Double)
        .contiguous()
        .view([-1]);
    Ok(Vec::<f64>::try_from(&flat)?)
}
