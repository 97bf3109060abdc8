use palette::cast::ArrayCast;

/// A color type that can be viewed as an array of `N` components of type `Component`.
///
/// This is implemented for every [`ArrayCast`] type from [`palette`], for example
/// `Srgba<f32>` or `LinSrgba<f32>` as `ColorComponents<f32, 4>`.
pub trait ColorComponents<Component, const N: usize>:
    ArrayCast<Array = [Component; N]> + Copy + 'static
{
}

impl<Color, Component, const N: usize> ColorComponents<Component, N> for Color where
    Color: ArrayCast<Array = [Component; N]> + Copy + 'static
{
}
