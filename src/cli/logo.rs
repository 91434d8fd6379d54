/// The ASCII-art logo printed by `--logo`.
pub const LOGO: &str = r#"
       %%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%#
    @%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%#%#
   %%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
  @%%%%%%%%%%%%%%%%%%%%%%#*+*#%%%%%%%%%%%%%%%%%%%%%#%
  @%%%%%%%%%%%%%%%%%%%#=:::::::=#%%%%%%%%%%%%%%%%%%%%
  @%%%%%%%%%%%%%%%%%#=:::::::::::=#%%%%%%%%%%%%%%%%%%
  %%%%%%%%%%%%%#**+=::::::=*=::::::=+**##%%%%%%%%%%%%
  @%%%%%%%%#+:::::::::::=#%%%#=:::::::::::=#%%%%%%%%%
  @%%%%%%%+:::::::::::=#%%%%%%%*-:::::::::::=#%%%%%%%
  @%%%%%%=:::::=+*###%%%%%%%%%%%%%##**+=:::::=#%%%%%%
  %%%%%%#:::::#%%%%%%%%%%%%%%%%%%%%%%%%%*:::::*%%%%%%
  %%%%%%+::::+%%%%%##%%%%%%%%#*****#%%%%%=::::+%%%%%%
  %%%%%%+::::*%%%#-:::=%%%%+::::::::-#%%%+::::+%%%%%%
  %%%%%%+::::*%%%#-:::=%%%%+::::::::-#%%%+::::+%%%%%%
  @%%%%%+::::*%%%%%##%%%%%%%%#######%%%%%+::::+%%%%%%
  %%%%%%+::::*%%%%%%%%%%%%%%%%%%%%%%%%%%%+::::+%%%%%%
  %%%%%%+::::*%%%%#***%%%%%%#*+++++*%%%%%+::::+%%%%%%
  %%%%%%+::::*%%%#-:::-%%%%+::::::::-#%%%+::::+%%%%%%
  @%%%%%+::::*%%%%=:::+%%%%*::::::::=%%%%+::::+%%%%%%
  @%%%%%+::::=%%%%%%#%%%%%%%%######%%%%%%=::::*%%%%%%
  %%%%%%#:::::*%%%%%%%%%%%%%%%%%%%%%%%%%*::::-#%%%%%%
  @%%%%%%+:::::-=+*******************+=-:::::+%%%%%%%
  @%%%%%%%+:::::::::::::::::::::::::::::::::+%%%%%%%%
  @%%%%%%%%%+:::::::::::::::::::::::::::::*%%%%%%%%%%
  %%%%%%%%%%%%%%##*******************#%%%%%%%%%%%%%%%
   @%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
    @%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
       @%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%@@
"#;
