use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use affinity_math::{AxisAngle, Matrix4x3, Quaternion, Vector3};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Parser)]
    #[command(about = "The Affinity math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: affinity_math::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
        /// Decompose a 4x3 affine matrix into translation, scale and rotation
        Decompose {
            /// The 12 matrix elements in column-major order
            #[arg(num_args = 12, allow_negative_numbers = true, required = true)]
            elements: Vec<f64>,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                affinity_math::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
            Command::Decompose { elements } => decompose(&elements),
        }
    }

    /// Translation, scale and rotation of an affine matrix.
    #[derive(Debug)]
    struct Decomposition {
        translation: Vector3<f64>,
        scale: Vector3<f64>,
        rotation: Quaternion<f64>,
        axis_angle: AxisAngle<f64>,
        euler_angles_zyx: Vector3<f64>,
    }

    impl Decomposition {
        /// Columns of the linear part are allowed to have any nonzero length.
        fn of(matrix: &Matrix4x3<f64>) -> Self {
            let rotation = matrix.unnormalized_rotation();
            Self {
                translation: matrix.translation_part(),
                scale: matrix.scale_factors(),
                rotation,
                axis_angle: AxisAngle::from_quaternion(&rotation),
                euler_angles_zyx: matrix.normalize_3x3().euler_angles_zyx(),
            }
        }
    }

    fn decompose(elements: &[f64]) -> Result<()> {
        let Ok(elements) = <[f64; 12]>::try_from(elements) else {
            anyhow::bail!("Expected 12 matrix elements, got {}", elements.len());
        };

        let matrix = Matrix4x3::from_cols_array(&elements);
        affinity_log::debug!("Decomposing matrix with properties {:?}", matrix.properties());

        if !matrix.determinant().is_normal() {
            anyhow::bail!("The linear part of the matrix is singular");
        }

        let Decomposition {
            translation,
            scale,
            rotation,
            axis_angle,
            euler_angles_zyx,
        } = affinity_log::with_trace_logging!("Decomposing matrix"; Decomposition::of(&matrix));

        println!("translation:       {translation}");
        println!("scale:             {scale}");
        println!(
            "rotation (xyzw):   ({}, {}, {}, {})",
            rotation.x(),
            rotation.y(),
            rotation.z(),
            rotation.w()
        );
        println!(
            "rotation axis:     {} by {} rad",
            axis_angle.axis(),
            axis_angle.angle()
        );
        println!("euler angles zyx:  {euler_angles_zyx} rad");

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_abs_diff_eq;
        use std::f64::consts::FRAC_PI_2;

        #[test]
        fn decomposing_scaled_rotation_gives_unit_rotation() {
            let matrix = Matrix4x3::from_cols_array(&[
                0.0, 2.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0,
            ]);
            let decomposition = Decomposition::of(&matrix);

            assert_abs_diff_eq!(decomposition.scale, Vector3::same(2.0), epsilon = 1e-12);
            assert_abs_diff_eq!(decomposition.rotation.norm(), 1.0, epsilon = 1e-12);
            assert!(
                decomposition
                    .rotation
                    .same_rotation_as(&Quaternion::rotation_z(FRAC_PI_2), 1e-12)
            );
            assert_abs_diff_eq!(decomposition.axis_angle.angle(), FRAC_PI_2, epsilon = 1e-12);
            assert_abs_diff_eq!(
                decomposition.axis_angle.axis(),
                Vector3::unit_z(),
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                decomposition.euler_angles_zyx,
                Vector3::new(0.0, 0.0, FRAC_PI_2),
                epsilon = 1e-12
            );
        }

        #[test]
        fn decomposing_uniform_scaling_gives_identity_rotation() {
            let matrix = Matrix4x3::from_cols_array(&[
                2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 1.0, 2.0, 3.0,
            ]);
            let decomposition = Decomposition::of(&matrix);

            assert_abs_diff_eq!(decomposition.translation, Vector3::new(1.0, 2.0, 3.0));
            assert!(
                decomposition
                    .rotation
                    .same_rotation_as(&Quaternion::identity(), 1e-12)
            );
            assert_abs_diff_eq!(decomposition.rotation.w().abs(), 1.0, epsilon = 1e-12);
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
