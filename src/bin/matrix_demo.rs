//! Elementary 2×2 matrix arithmetic demo: elementwise addition, elementwise
//! multiplication, and the matrix product, printed one per line.

type Mat2 = [[i64; 2]; 2];

fn elementwise_add(a: &Mat2, b: &Mat2) -> Mat2 {
    let mut out = [[0; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[i][j] + b[i][j];
        }
    }
    out
}

fn elementwise_mul(a: &Mat2, b: &Mat2) -> Mat2 {
    let mut out = [[0; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            out[i][j] = a[i][j] * b[i][j];
        }
    }
    out
}

fn matrix_product(a: &Mat2, b: &Mat2) -> Mat2 {
    let mut out = [[0; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                out[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    out
}

fn format_matrix(m: &Mat2) -> String {
    format!(
        "[[{}, {}], [{}, {}]]",
        m[0][0], m[0][1], m[1][0], m[1][1]
    )
}

fn main() {
    let a: Mat2 = [[2, 4], [3, 6]];
    let b: Mat2 = [[5, 7], [8, 10]];

    println!("{}: Elementwise addition", format_matrix(&elementwise_add(&a, &b)));
    println!(
        "{}: Elementwise multiplication",
        format_matrix(&elementwise_mul(&a, &b))
    );
    println!("{}: Matrix product", format_matrix(&matrix_product(&a, &b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Mat2 = [[2, 4], [3, 6]];
    const B: Mat2 = [[5, 7], [8, 10]];

    #[test]
    fn elementwise_sum() {
        assert_eq!(elementwise_add(&A, &B), [[7, 11], [11, 16]]);
    }

    #[test]
    fn elementwise_product() {
        assert_eq!(elementwise_mul(&A, &B), [[10, 28], [24, 60]]);
    }

    #[test]
    fn full_matrix_product() {
        assert_eq!(matrix_product(&A, &B), [[42, 54], [63, 81]]);
    }

    #[test]
    fn one_line_formatting() {
        assert_eq!(format_matrix(&A), "[[2, 4], [3, 6]]");
    }
}
