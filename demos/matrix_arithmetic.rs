use anyhow::Result;

use densemat::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]])?;

    println!("a =\n{}", a);
    println!("b =\n{}", b);
    println!("a + b =\n{}", a.checked_add(&b)?);
    println!("a - b =\n{}", a.checked_sub(&b)?);
    println!("a * b =\n{}", a.matmul(&b)?);
    println!("a^T =\n{}", a.transpose());

    let id = Matrix::identity(2)?;
    println!("a * I == a: {}", a.matmul(&id)?.approx_eq(&a));

    // Shape violations surface as errors rather than partial results.
    let wide = Matrix::<f64>::zeros(2, 3)?;
    match wide.matmul(&b) {
        Ok(_) => unreachable!("2x3 * 2x2 must not multiply"),
        Err(e) => println!("expected failure: {}", e),
    }

    Ok(())
}
