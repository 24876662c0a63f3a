// Art blocks keep their surrounding blank lines; the table trims them once.

pub const CACHYOS: &str = r##"
          .-------------------------:
          .+=========================.
         :++===++==================-       :++-
        :*++====+++++=============-        .==:
       -*+++=====+***++==========:
      =*++++========------------:
     =*+++++=====-                     ...
   .+*+++++=-===:                    .=+++=:
  :++++=====-==:                     -*****+
 :++========-=.                      .=+**+.
.+==========-.                          .
 :+++++++====-                                .--==-.
  :++==========.                             :+++++++:
    .-===========:                           .+*****+:
      -=======++++:::::::::::::::::::::::::-:  .---:
       :======++++====+++******************=.
        :=====+++==========++++++++++++++*-
         .====++==============++++++++++*-
          .===+==================+++++++:
           .-=======================+++:
             ..........................
"##;

pub const ZORIN: &str = r##"
       "osssssssssssssssssssso"
       .osssssssssssssssssssssso.
      .+oooooooooooooooooooooooo+.


  "::::::::::::::::::::::.         .:"
 "+ssssssssssssssssss+:."     "".:+ssso"
.ossssssssssssssso/.       "-+ossssssso.
ssssssssssssso/-"      "-/osssssssssssss
.ossssssso/-"      .-/ossssssssssssssso.
 "+sss+:.      ".:+ssssssssssssssssss+"
  "":.         .::::::::::::::::::::::"


      .+oooooooooooooooooooooooo+.
       -osssssssssssssssssssssso-
        "osssssssssssssssssssso"
    "##;

pub const OPENSUSE: &str = r##"
           .;ldkO0000Okdl;.
       .;d00xl:^''''''^:ok00d;.
     .d00l'                'o00d.
   .d0Kd'  Okxol:;,.          :O0d.
  .OKKKK0kOKKKKKKKKKKOxo:,      lKO.
 ,0KKKKKKKKKKKKKKKK0P^,,,^dx:    ;00,
.OKKKKKKKKKKKKKKKKk'.oOPPb.'0k.   cKO.
:KKKKKKKKKKKKKKKKK: kKx..dd lKd   'OK:
dKKKKKKKKKKKOx0KKKd ^0KKKO' kKKc   dKd
dKKKKKKKKKKKK;.;oOKx,..^..;kKKK0.  dKd
:KKKKKKKKKKKK0o;...^cdxxOK0O/^^'  .0K:
 kKKKKKKKKKKKKKKK0x;,,......,;od  lKk
 '0KKKKKKKKKKKKKKKKKKKKK00KKOo^  c00'
  'kKKKOxddxkOO00000Okxoc;''   .dKk'
    l0Ko.                    .c00l'
     'l0Kk:.              .;xK0l'
        'lkK0xl:;,,,,;:ldO0kl'
            '^:ldxkkkkxdl:^'
    "##;

pub const ELEMENTARY: &str = r##"
         eeeeeeeeeeeeeeeee
      eeeeeeeeeeeeeeeeeeeeeee
    eeeee  eeeeeeeeeeee   eeeee
  eeee   eeeee       eee     eeee
 eeee   eeee          eee     eeee
eee    eee            eee       eee
eee   eee            eee        eee
ee    eee           eeee       eeee
ee    eee         eeeee      eeeeee
ee    eee       eeeee      eeeee ee
eee   eeee   eeeeee      eeeee  eee
eee    eeeeeeeeee     eeeeee    eee
 eeeeeeeeeeeeeeeeeeeeeeee    eeeee
  eeeeeeee eeeeeeeeeeee      eeee
    eeeee                 eeeee
      eeeeeee         eeeeeee
         eeeeeeeeeeeeeeeee
    "##;

pub const ARCH: &str = r##"
                   -"
                  .o+"
                 "ooo/
                "+oooo:
               "+oooooo:
               -+oooooo+:
             "/:-:++oooo+:
            "/++++/+++++++:
           "/++++++++++++++:
          "/+++ooooooooooooo/"
         ./ooosssso++osssssso+"
        .oossssso-""""/ossssss+"
       -osssssso.      :ssssssso.
      :osssssss/        osssso+++.
     /ossssssss/        +ssssooo/-
   "/ossssso+/:-        -:/+osssso+-
  "+sso+:-"                 ".-/+oso:
 "++:.                           "-/+/
 ."                                 "/
"##;

pub const ENDEAVOUROS: &str = r##"
                     ./o.
                   ./sssso-
                 ":osssssss+-
               ":+sssssssssso/.
             "-/ossssssssssssso/.
           "-/+sssssssssssssssso+:
         "-:/+sssssssssssssssssso+/.
       ".://osssssssssssssssssssso++-
      .://+ssssssssssssssssssssssso++:
    .:///ossssssssssssssssssssssssso++:
  ":////ssssssssssssssssssssssssssso+++.
"-////+ssssssssssssssssssssssssssso++++-
 "..-+oosssssssssssssssssssssssso+++++/"
   ./++++++++++++++++++++++++++++++/:.
  ":::::::::::::::::::::::::------""
    "##;

pub const POP_OS: &str = r##"
            /////////////
         /////////////////////
      ///////*767////////////////
    //////7676767676*//////////////
   /////76767//7676767//////////////
  /////767676///*76767///////////////
 ///////767676///76767.///7676*///////
/////////767676//76767///767676////////
//////////76767676767////76767/////////
///////////76767676//////7676//////////
////////////,7676,///////767///////////
/////////////*7676///////76////////////
///////////////7676////////////////////
 ///////////////7676///767////////////
  //////////////////////'////////////
   //////.7676767676767676767,//////
    /////767676767676767676767/////
      ///////////////////////////
         /////////////////////
             /////////////
    "##;

pub const FEDORA: &str = r##"
             .',;::::;,'.
         .';:cccccccccccc:;,.
      .;cccccccccccccccccccccc;.
    .:cccccccccccccccccccccccccc:.
  .;ccccccccccccc;.:dddl:.;ccccccc;.
 .:ccccccccccccc;OWMKOOXMWd;ccccccc:.
.:ccccccccccccc;KMMc;cc;xMMc;ccccccc:.
,cccccccccccccc;MMM.;cc;;WW:;cccccccc,
:cccccccccccccc;MMM.;cccccccccccccccc:
:ccccccc;oxOOOo;MMM0OOk.;cccccccccccc:
cccccc;0MMKxdd:;MMMkddc.;cccccccccccc;
ccccc;XM0';cccc;MMM.;cccccccccccccccc'
ccccc;MMo;ccccc;MMW.;ccccccccccccccc;
ccccc;0MNc.ccc.xMMd;ccccccccccccccc;
cccccc;dNMWXXXWM0:;cccccccccccccc:,
cccccccc;.:odl:.;cccccccccccccc:,.
:cccccccccccccccccccccccccccc:'.
.:cccccccccccccccccccccc:;,..
  '::cccccccccccccc::;,.
    "##;

pub const ANDROID: &str = r##"
         -o          o-            
          +hydNNNNdyh+           
        +mMMMMMMMMMMMMm+           
      "dMMm:NMMMMMMN:mMMd"         
      hMMMMMMMMMMMMMMMMMMh        
  ..  yyyyyyyyyyyyyyyyyyyy  ..    
.mMMm"MMMMMMMMMMMMMMMMMMMM"mMMm.   
:MMMM-MMMMMMMMMMMMMMMMMMMM-MMMM:   
:MMMM-MMMMMMMMMMMMMMMMMMMM-MMMM:  
:MMMM-MMMMMMMMMMMMMMMMMMMM-MMMM:   
:MMMM-MMMMMMMMMMMMMMMMMMMM-MMMM:  
-MMMM-MMMMMMMMMMMMMMMMMMMM-MMMM-   
 +yy+ MMMMMMMMMMMMMMMMMMMM +yy+     
      mMMMMMMMMMMMMMMMMMMm        
      "/++MMMMh++hMMMM++/"       
          MMMMo  oMMMM              
          MMMMo  oMMMM            
          oNMm-  -mMNs

        "##;

pub const UBUNTU: &str = r##"
            .-/+oossssoo+\-.              
        ":+ssssssssssssssssss+:"          
      -+ssssssssssssssssssyyssss+-        
    .ossssssssssssssssssdMMMNysssso.      
   /ssssssssssshdmmNNmmyNMMMMhssssss\     
  +ssssssssshmydMMMMMMMNddddyssssssss+     
 /sssssssshNMMMyhhyyyyhmNMMMNhssssssss\    
.ssssssssdMMMNhsssssssssshNMMMdssssssss.   
+sssshhhyNMMNyssssssssssssyNMMMysssssss+  
ossyNMMMNyMMhsssssssssssssshmmmhssssssso   
ossyNMMMNyMMhsssssssssssssshmmmhssssssso   
+sssshhhyNMMNyssssssssssssyNMMMysssssss+   
.ssssssssdMMMNhsssssssssshNMMMdssssssss.   
 \sssssssshNMMMyhhyyyyhdNMMMNhssssssss/     
  +sssssssssdmydMMMMMMMMddddyssssssss+    
   \ssssssssssshdmNNNNmyNMMMMhssssss/       
    .ossssssssssssssssssdMMMNysssso.       
      -+sssssssssssssssssyyyssss+-
        ":+ssssssssssssssssss+:"  
            .-\+oossssoo+/-.
"##;

pub const DEBIAN: &str = r##"
       _,met$$$$$gg.
    ,g$$$$$$$$$$$$$$$P.
  ,g$$P"        """Y$$."
 ,$$P'              .$$$."
',$$P       ,ggs.     "$$b:
"d$$'     ,$P"'   .    $$$
 $$P      d$'     ,    $$P
 $$:      $$.   -    ,d$$'
 $$;      Y$b._   _,d$P'
 Y$$.    ".""Y$$$$P"'
 "$$b      "-.__
  "Y$$
   "Y$$.
     "$$b.
       "Y$$b.
          ""Y$b._
              """"

"##;

pub const MANJARO: &str = r##"
██████████████████  ████████
██████████████████  ████████
██████████████████  ████████
██████████████████  ████████
████████            ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
████████  ████████  ████████
"##;

pub const NIXOS: &str = r##"
          ▗▄▄▄       ▗▄▄▄▄    ▄▄▄▖
          ▜███▙       ▜███▙  ▟███▛
           ▜███▙       ▜███▙▟███▛
            ▜███▙       ▜██████▛
     ▟█████████████████▙ ▜████▛     ▟▙
    ▟███████████████████▙ ▜███▙    ▟██▙
           ▄▄▄▄▖           ▜███▙  ▟███▛
          ▟███▛             ▜██▛ ▟███▛
         ▟███▛               ▜▛ ▟███▛
▟███████████▛                  ▟██████████▙
▜██████████▛                  ▟███████████▛
      ▟███▛ ▟▙               ▟███▛
     ▟███▛ ▟██▙             ▟███▛
    ▟███▛  ▜███▙           ▝▀▀▀▀
    ▜██▛    ▜███▙ ▜██████████████████▛
     ▜▛     ▟████▙ ▜████████████████▛
           ▟██████▙       ▜███▙
          ▟███▛▜███▙       ▜███▙
         ▟███▛  ▜███▙       ▜███▙
         ▝▀▀▀    ▀▀▀▀▘       ▀▀▀▘
"##;

pub const MINT: &str = r##"
             ...-:::::-...
          .-MMMMMMMMMMMMMMM-.
      .-MMMM"..-:::::::-.."MMMM-.
    .:MMMM.:MMMMMMMMMMMMMMM:.MMMM:.
   -MMM-M---MMMMMMMMMMMMMMMMMMM.MMM-
 ":MMM:MM"  :MMMM:....::-...-MMMM:MMM:"
 :MMM:MMM"  :MM:"  ""    ""  ":MMM:MMM:
.MMM.MMMM"  :MM.  -MM.  .MM-  "MMMM.MMM.
:MMM:MMMM"  :MM.  -MM-  .MM:  "MMMM-MMM:
:MMM:MMMM"  :MM.  -MM-  .MM:  "MMMM:MMM:
:MMM:MMMM"  :MM.  -MM-  .MM:  "MMMM-MMM:
.MMM.MMMM"  :MM:--:MM:--:MM:  "MMMM.MMM.
 :MMM:MMM-  "-MMMMMMMMMMMM-"  -MMM-MMM:
  :MMM:MMM:"                ":MMM:MMM:
   .MMM.MMMM:--------------:MMMM.MMM.
     '-MMMM.-MMMMMMMMMMMMMMM-.MMMM-'
       '.-MMMM""--:::::--""MMMM-.'
            '-MMMMMMMMMMMMM-'
               ""-:::::-""
"##;

pub const GENTOO: &str = r##"
         -/oyddmdhs+:.
     -odNMMMMMMMMNNmhy+-"
   -yNMMMMMMMMMMMNNNmmdhy+-
 "omMMMMMMMMMMMMNmdmmmmddhhy/"
 omMMMMMMMMMMMNhhyyyohmdddhhhdo"
.ydMMMMMMMMMMdhs++so/smdddhhhhdm+"
 oyhdmNMMMMMMMNdyooydmddddhhhhyhNd.
  :oyhhdNNMMMMMMMNNNmmdddhhhhhyymMh
    .:+sydNMMMMMNNNmmmdddhhhhhyymMmy
       /mMMMMMMNNNmmmdddhhhhhmMhs:
    "oNMMMMMMMNNNmmmddddhhdmMNhs+"
  "sNMMMMMMMMNNNmmmdddddmNMmhs/.
 /NMMMMMMMMNNNNmmmdddmNMNdso:"
+MMMMMMMNNNNNmmmmdmNMNdso/-
yMMNNNNNNNmmmmmNNMmhs+/-"
/hMMNNNNNNNNMNdhs++/-"
"/ohdmmddhys+++/:."
  "-//////:--.

"##;

pub const PARDUS: &str = r##"
 .smNdy+-    ".:/osyyso+:."    -+ydmNs.
/Md- -/ymMdmNNdhso/::/oshdNNmdMmy/. :dM/
mN.     oMdyy- -y          "-dMo     .Nm
.mN+"  sMy hN+ -:             yMs  "+Nm.
 "yMMddMs.dy "+"               sMddMMy"
   +MMMo  ."  .                 oMMM+
   "NM/    """""."    "."""""    +MN"
   yM+   ".-:yhomy    ymohy:-."   +My
   yM:          yo    oy          :My
   +Ms         .N"    "N.      +h sM+
   "MN      -   -::::::-   : :o:+"NM"
    yM/    sh   -dMMMMd-   ho  +y+My
    .dNhsohMh-//: /mm/ ://-yMyoshNd"
      "-ommNMm+:/. oo ./:+mMNmmo:"
     "/o+.-somNh- :yy: -hNmos-.+o/"
    ./" .s/"s+sMdd+""+ddMs+s"/s. "/.
        : -y.  -hNmddmNy.  .y- :
         -+       ".."       +-

"##;

pub const WINDOWS: &str = r##"
        ,.=:!!t3Z3z.,
       :tt:::tt333EE3
       Et:::ztt33EEEL @Ee.,      ..,
      ;tt:::tt333EE7 ;EEEEEEttttt33#
     :Et:::zt333EEQ. $EEEEEttttt33QL
     it::::tt333EEF @EEEEEEttttt33F
    ;3=*^"""*4EEV :EEEEEEttttt33@.
    ,.=::::!t=., " @EEEEEEtttz33QF
   ;::::::::zt33)   "4EEEtttji3P*
  :t::::::::tt33.:Z3z..  "" ,..g.
  i::::::::zt33F AEEEtttt::::ztF
 ;:::::::::t33V ;EEEttttt::::t3
 E::::::::zt33L @EEEtttt::::z3F
{3=*^"""*4E3) ;EEEtttt:::::tZ"
             " :EEEEtttt::::z7
                 "VEzjt:;;z>*"
"##;

pub const MACOS: &str = r##"
                    c.'
                 ,xNMM.
               .OMMMMo
               lMM"
     .;loddo:.  .olloddol;.
   cKMMMMMMMMMMNWMMMMMMMMMM0:
 .KMMMMMMMMMMMMMMMMMMMMMMMWd.
 XMMMMMMMMMMMMMMMMMMMMMMMX.
;MMMMMMMMMMMMMMMMMMMMMMMM:
:MMMMMMMMMMMMMMMMMMMMMMMM:
.MMMMMMMMMMMMMMMMMMMMMMMMX.
 kMMMMMMMMMMMMMMMMMMMMMMMMWd.
 'XMMMMMMMMMMMMMMMMMMMMMMMMk
  'XMMMMMMMMMMMMMMMMMMMMMMMMK.
    kMMMMMMMMMMMMMMMMMMMMMMd
     ;KMMMMMMMWXXWMMMMMMMk.
       "cooc*"    "*coo'"
"##;

pub const APER: &str = r##"
  ___
 / _ \
/ /_\ \_ __   ___ _ __
|  _  | '_ \ / _ \ '__|
| | | | |_) |  __/ |
\_| |_| .__/ \___|_|
      | |
      |_|
        "##;

pub const TUX: &str = r##"
    .--.
   |o_o |
   |:_/ |
  //   \ \
 (|     | )
/'\_   _/`\
\___)=(___/
"##;
