#[macro_export]
macro_rules! param_value {
    (, $name:ident) => {
        $name
    };
    ($value:expr, $name:ident) => {
        $value
    };
}

#[macro_export]
macro_rules! push_param {
    ($params:ident, required, $key:expr, $value:expr) => {
        $params.push(($key, $value.to_string()));
    };
    ($params:ident, optional, $key:expr, $value:expr) => {
        if let Some(ref v) = $value {
            $params.push(($key, v.to_string()));
        }
    };
}

/// Build the query pairs of an endpoint request. The key of each pair is the
/// identifier as written, the value is either the expression after `=>` or a
/// variable of the same name. `optional` values are skipped when `None`.
/// ```ignore
/// let params = build_params! {
///     required lang => "EN",
///     optional categories,
/// };
/// ```
#[macro_export]
macro_rules! build_params {
    (
        $(
            $kind:ident $name:ident $( => $value:expr )?
        ),+ $(,)?
    ) => {
        {
            let mut params: Vec<(String, String)> = Vec::new();
            $(
                $crate::push_param!(
                    params,
                    $kind,
                    stringify!($name).to_string(),
                    $crate::param_value!($( $value )?, $name)
                );
            )+
            params
        }
    };
}
